//! Atomic execution of a proposal's messages.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use atomone_store::CacheStore;
use tracing::{debug, warn};

use crate::context::Context;
use crate::error::MultisigError;
use crate::keeper::Keeper;
use crate::msgs::AnyMsg;
use crate::router::MsgHandler;

/// Business outcome of running a proposal's messages.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExecOutcome {
    /// Every message succeeded; responses are in message order.
    Success(Vec<AnyMsg>),
    /// A message failed and nothing was written.
    Failure(String),
}

impl Keeper {
    /// Run `msgs` in order against a cache overlay of `ctx`'s store.
    ///
    /// On success the overlay is committed and the messages' events are
    /// appended to `ctx`. On the first failure (no route, handler error or
    /// panic) the overlay and its events are dropped. `Err` is reserved for
    /// failures of the outer store itself.
    pub fn execute_msgs(
        &self,
        ctx: &mut Context<'_>,
        msgs: &[AnyMsg],
    ) -> Result<ExecOutcome, MultisigError> {
        let block_time = ctx.block_time();
        let (writes, events, responses) = {
            let mut cache = CacheStore::new(ctx.store());
            let mut cache_ctx = Context::new(&mut cache, block_time);
            let mut responses = Vec::with_capacity(msgs.len());
            for (i, msg) in msgs.iter().enumerate() {
                let result = match self.router().route(&msg.type_url) {
                    Some(handler) => safe_execute_handler(handler.as_ref(), &mut cache_ctx, msg),
                    None => Err(format!("no handler registered for {}", msg.type_url)),
                };
                match result {
                    Ok(response) => responses.push(response),
                    Err(reason) => {
                        let reason = format!("execute of msg {i} {} fails: {reason}", msg.type_url);
                        warn!(%reason, "proposal messages rolled back");
                        return Ok(ExecOutcome::Failure(reason));
                    }
                }
            }
            let events = cache_ctx.into_events();
            (cache.into_write_set(), events, responses)
        };

        debug!(writes = writes.len(), events = events.len(), "committing proposal messages");
        writes.apply(ctx.store_mut())?;
        ctx.emit_all(events);
        Ok(ExecOutcome::Success(responses))
    }
}

/// Call the handler, turning both its errors and its panics into a reason.
fn safe_execute_handler(
    handler: &dyn MsgHandler,
    ctx: &mut Context<'_>,
    msg: &AnyMsg,
) -> Result<AnyMsg, String> {
    match panic::catch_unwind(AssertUnwindSafe(|| handler.handle(ctx, msg))) {
        Ok(Ok(response)) => Ok(response),
        Ok(Err(err)) => Err(err.to_string()),
        Err(payload) => Err(format!(
            "handling proposal msg [{}] PANICKED: {}",
            msg.type_url,
            panic_message(payload.as_ref())
        )),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
