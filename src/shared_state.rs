use std::sync::Arc;

use crate::services::reference_data::ReferenceData;

/// Handler state. The reference data is loaded once and only ever read, so
/// it is shared without locking.
#[derive(Clone, Debug)]
pub struct AppState {
    pub reference: Arc<ReferenceData>,
}

impl AppState {
    pub fn new(reference: ReferenceData) -> Self {
        Self {
            reference: Arc::new(reference),
        }
    }
}
