use std::sync::Arc;

use fraudwatch_core::counter::CounterClock;
use fraudwatch_store::Backend;

pub type AppState = Arc<AppStateInner>;

pub struct AppStateInner {
    pub store: Backend,
    pub clock: CounterClock,
    pub counter_goal: u64,
}
