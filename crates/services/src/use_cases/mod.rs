//! One orchestrator per operation. Each holds its ports behind `Arc` and
//! exposes a single `execute`.

mod add_comment;
mod add_thread;
mod delete_comment;
mod detail_thread;

pub use add_comment::AddCommentUseCase;
pub use add_thread::AddThreadUseCase;
pub use delete_comment::{DeleteCommentParams, DeleteCommentUseCase};
pub use detail_thread::DetailThreadUseCase;
