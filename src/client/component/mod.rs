pub mod evaluate_button;
pub mod guiding_box;
pub mod header;
pub mod input;
pub mod layout;
pub mod modal;
pub mod page;
pub mod pagination;
pub mod protected_layout;
pub mod search_box;
pub mod status_badge;
pub mod terminal_loader;
pub mod token_gauge;

pub use evaluate_button::EvaluateButton;
pub use guiding_box::GuidingBox;
pub use header::Header;
pub use input::{DescriptionInput, InputBox};
pub use layout::Layout;
pub use modal::{ConfirmationModal, Modal};
pub use page::{ErrorPage, LoadingPage, Page};
pub use pagination::{Pagination, PaginationData};
pub use protected_layout::{ProtectedLayout, RequiresAdmin, RequiresLoggedIn};
pub use search_box::SearchBox;
pub use status_badge::StatusBadge;
pub use terminal_loader::TerminalLoader;
pub use token_gauge::TokenGauge;
