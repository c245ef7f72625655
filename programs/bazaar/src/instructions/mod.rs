pub mod buy_nft;
pub mod claim_bid;
pub mod init_pool;
pub mod init_sale_manager;
pub mod place_bid;
pub mod redeem_nft;
pub mod sell_nft;
pub mod sell_nft_by_auction;
pub mod withdraw_fund;

pub use buy_nft::*;
pub use claim_bid::*;
pub use init_pool::*;
pub use init_sale_manager::*;
pub use place_bid::*;
pub use redeem_nft::*;
pub use sell_nft::*;
pub use sell_nft_by_auction::*;
pub use withdraw_fund::*;
