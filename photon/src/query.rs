//! Read-only queries.

use atomone_store::KvStore;
use atomone_types::Dec;

use crate::bank::Bank;
use crate::conversion::conversion_rate;
use crate::error::PhotonError;
use crate::keeper::Keeper;
use crate::params::Params;
use crate::PHOTON_DENOM;

impl Keeper {
    pub fn query_params(&self, store: &dyn KvStore) -> Result<Params, PhotonError> {
        self.get_params(store)
    }

    /// The rate a burn submitted now would get.
    pub fn query_conversion_rate(&self, bank: &dyn Bank) -> Result<Dec, PhotonError> {
        conversion_rate(bank.supply(self.bond_denom()), bank.supply(PHOTON_DENOM))
    }
}
