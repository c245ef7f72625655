pub mod auction;
pub mod escrow_pot;
pub mod pda;
pub mod pool;
pub mod sale_manager;

pub use auction::*;
pub use escrow_pot::*;
pub use pool::*;
pub use sale_manager::*;
