//! Site announcement domain entities.

pub mod audience;
pub mod model;
pub mod view;

pub use audience::AnnouncementAudience;
pub use model::Announcement;
pub use view::AnnouncementView;
