/// Bounded, persisted search history.
pub mod history;
/// Latest-request-wins state slots for async service calls.
pub mod session;

pub use history::{DEFAULT_HISTORY_CAPACITY, HistoryError, HistoryStore, SearchHistory};
pub use session::{RequestSlot, RequestTicket, SlotState};
