//! Repository implementations for all Amoria entities.

pub mod announcement;
pub mod dismissal;
pub mod favorite;
pub mod match_request;
pub mod matching;
pub mod member;
pub mod message;
pub mod photo;
pub mod profile_view;
pub mod report;
pub mod support;

pub use announcement::AnnouncementRepository;
pub use dismissal::DismissalRepository;
pub use favorite::{FavoriteRepository, FavoriteWithActor};
pub use match_request::{MatchRequestRepository, RequestWithRequester};
pub use matching::{MatchRepository, MatchWithNames};
pub use member::MemberRepository;
pub use message::{MessageRepository, MessageWithSender};
pub use photo::PhotoRepository;
pub use profile_view::{ProfileViewRepository, ViewWithViewer};
pub use report::{ReportRepository, ReportWithNames};
pub use support::{AdminMessageRepository, AdminMessageWithMember};
