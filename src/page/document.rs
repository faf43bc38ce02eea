use std::sync::{Arc, Mutex, MutexGuard};

pub const RESTAURANT_DETAILS: &str = "restaurant-details";
pub const REVIEWS: &str = "reviews";
pub const RESERVATION_MESSAGE: &str = "reservation-message";
pub const RESERVATIONS: &str = "reservations";
pub const POPULAR: &str = "popular";

/// A named area of the page that an operation renders into.
pub trait DisplayRegion {
    fn id(&self) -> &str;

    fn render(&self, html: String);

    fn show_error(&self, message: String);
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum RegionState {
    #[default]
    Empty,
    Rendered(String),
    Failed(String),
}

#[derive(Debug, Default)]
struct RegionInner {
    state: RegionState,
    mutations: usize,
}

/// Display region kept in memory until the page is written out.
/// Clones share the same contents.
#[derive(Clone, Debug)]
pub struct MemoryRegion {
    id: &'static str,
    inner: Arc<Mutex<RegionInner>>,
}

impl MemoryRegion {
    pub fn new(id: &'static str) -> Self {
        Self {
            id,
            inner: Arc::new(Mutex::new(RegionInner::default())),
        }
    }

    pub fn state(&self) -> RegionState {
        self.lock().state.clone()
    }

    /// How many times the region was written to.
    pub fn mutations(&self) -> usize {
        self.lock().mutations
    }

    fn lock(&self) -> MutexGuard<'_, RegionInner> {
        // a panicking writer cannot leave the region half written
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn set(&self, state: RegionState) {
        let mut inner = self.lock();
        inner.state = state;
        inner.mutations += 1;
    }
}

impl DisplayRegion for MemoryRegion {
    fn id(&self) -> &str {
        self.id
    }

    fn render(&self, html: String) {
        self.set(RegionState::Rendered(html));
    }

    fn show_error(&self, message: String) {
        self.set(RegionState::Failed(message));
    }
}

/// The display regions of the restaurant page.
#[derive(Clone, Debug)]
pub struct Document {
    pub restaurant_details: MemoryRegion,
    pub reviews: MemoryRegion,
    pub reservation_message: MemoryRegion,
    pub reservations: MemoryRegion,
    pub popular: MemoryRegion,
}

impl Document {
    pub fn new() -> Self {
        Self {
            restaurant_details: MemoryRegion::new(RESTAURANT_DETAILS),
            reviews: MemoryRegion::new(REVIEWS),
            reservation_message: MemoryRegion::new(RESERVATION_MESSAGE),
            reservations: MemoryRegion::new(RESERVATIONS),
            popular: MemoryRegion::new(POPULAR),
        }
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
