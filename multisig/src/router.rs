//! Message routing.
//!
//! The host registers a handler per message type; proposals only ever see
//! the [`Router`] capability.

use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use atomone_types::Address;
use thiserror::Error;

use crate::context::Context;
use crate::msgs::{AnyMsg, Msg};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RouterError {
    #[error("no handler registered for {0}")]
    NoRoute(String),

    #[error("handler for {0} is already registered")]
    DuplicateRoute(String),

    #[error("cannot decode {type_url}: {reason}")]
    Decode { type_url: String, reason: String },

    #[error("cannot encode {type_url}: {reason}")]
    Encode { type_url: String, reason: String },

    #[error("{0}")]
    Handler(String),
}

impl RouterError {
    /// Wrap a handler's business error.
    pub fn handler(err: impl fmt::Display) -> Self {
        Self::Handler(err.to_string())
    }
}

/// Executes one message type.
pub trait MsgHandler: Send + Sync {
    /// Addresses that must have authorised `msg`.
    fn signers(&self, msg: &AnyMsg) -> Result<Vec<Address>, RouterError>;

    fn handle(&self, ctx: &mut Context<'_>, msg: &AnyMsg) -> Result<AnyMsg, RouterError>;
}

/// Resolves a message type to its handler.
pub trait Router: Send + Sync {
    fn route(&self, type_url: &str) -> Option<Arc<dyn MsgHandler>>;
}

/// A dispatch table keyed by type URL, filled at startup.
#[derive(Default)]
pub struct MsgRouter {
    routes: HashMap<String, Arc<dyn MsgHandler>>,
}

impl MsgRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_handler(
        &mut self,
        type_url: impl Into<String>,
        handler: Arc<dyn MsgHandler>,
    ) -> Result<(), RouterError> {
        let type_url = type_url.into();
        if self.routes.contains_key(&type_url) {
            return Err(RouterError::DuplicateRoute(type_url));
        }
        self.routes.insert(type_url, handler);
        Ok(())
    }

    /// Register a typed handler function for `M`, answering with `R`.
    pub fn register<M, R, F>(&mut self, f: F) -> Result<(), RouterError>
    where
        M: Msg + 'static,
        R: Msg + 'static,
        F: Fn(&mut Context<'_>, M) -> Result<R, RouterError> + Send + Sync + 'static,
    {
        self.register_handler(
            M::TYPE_URL,
            Arc::new(TypedHandler {
                f,
                _types: PhantomData::<fn() -> (M, R)>,
            }),
        )
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl Router for MsgRouter {
    fn route(&self, type_url: &str) -> Option<Arc<dyn MsgHandler>> {
        self.routes.get(type_url).cloned()
    }
}

struct TypedHandler<M, R, F> {
    f: F,
    _types: PhantomData<fn() -> (M, R)>,
}

impl<M, R, F> MsgHandler for TypedHandler<M, R, F>
where
    M: Msg,
    R: Msg,
    F: Fn(&mut Context<'_>, M) -> Result<R, RouterError> + Send + Sync,
{
    fn signers(&self, msg: &AnyMsg) -> Result<Vec<Address>, RouterError> {
        Ok(msg.unpack::<M>()?.signers())
    }

    fn handle(&self, ctx: &mut Context<'_>, msg: &AnyMsg) -> Result<AnyMsg, RouterError> {
        let response = (self.f)(ctx, msg.unpack::<M>()?)?;
        AnyMsg::pack(&response)
    }
}
