/// Data model for the Stratus inventory snapshot.
///
/// Re-exports the file record, pricing configuration and supporting types.
pub mod file_record;
pub mod pricing;
pub mod size;

pub use file_record::{normalise_provider, FileRecord};
pub use pricing::{PricingConfig, PricingError, ProviderPricing};
