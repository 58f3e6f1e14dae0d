pub use eb_update_core::{completion, contract, resource_ids};
