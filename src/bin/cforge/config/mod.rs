mod blend;
mod net;
mod recipe;

pub use blend::build_blend_config;
pub use net::{build_net_loader, load_network};
pub use recipe::Recipe;
