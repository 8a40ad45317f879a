use crate::clock::{Clock, SystemClock};
use crate::models::TrackingState;
use crate::timer::TimerSlot;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub data: Arc<Mutex<TrackingState>>,
    pub timer: Arc<Mutex<TimerSlot>>,
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    pub fn new(data_path: PathBuf, data: TrackingState) -> Self {
        Self::with_clock(data_path, data, Arc::new(SystemClock))
    }

    pub fn with_clock(data_path: PathBuf, data: TrackingState, clock: Arc<dyn Clock>) -> Self {
        Self {
            data_path,
            data: Arc::new(Mutex::new(data)),
            timer: Arc::new(Mutex::new(TimerSlot::default())),
            clock,
        }
    }
}
