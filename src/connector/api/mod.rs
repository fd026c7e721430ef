pub mod container;
pub mod controller;
pub mod presenter;
pub mod router;
pub mod session;

pub use container::{Container, ContainerConfig};
pub use presenter::Presenter;
pub use router::Router;
pub use session::{Session, SessionCommand};
