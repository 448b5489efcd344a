pub mod about;
pub mod calendar;
pub mod detail;
pub mod saved;

pub use about::AboutContent;
pub use calendar::{CalendarMsg, CalendarScreen, CalendarViewState};
pub use detail::{DetailScreen, DetailViewState};
pub use saved::{SavedMsg, SavedScreen, SavedViewState};
