mod get_container;
mod list_containers;
mod mark_used;
mod soft_delete;
mod undo_last_delete;
mod update_shelf_life;
mod view;

pub use get_container::GetContainer;
pub use list_containers::ListContainers;
pub use mark_used::MarkUsed;
pub use soft_delete::SoftDelete;
pub use undo_last_delete::UndoLastDelete;
pub use update_shelf_life::UpdateShelfLife;
pub use view::ContainerView;
