use log::info;
use yew::Callback;

/// The video overlay the cipher unlocks.
pub trait MediaGate {
    fn open(&self);
    fn close(&self);
}

/// Media gate backed by the page's overlay state.
#[derive(Clone, PartialEq)]
pub struct VideoGate {
    on_change: Callback<bool>,
}

impl VideoGate {
    pub fn new(on_change: Callback<bool>) -> Self {
        Self { on_change }
    }
}

impl MediaGate for VideoGate {
    fn open(&self) {
        info!("Opening video overlay");
        self.on_change.emit(true);
    }

    fn close(&self) {
        info!("Closing video overlay");
        self.on_change.emit(false);
    }
}
