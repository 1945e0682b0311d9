pub mod use_post_board;

pub use use_post_board::{use_post_board, PostBoardHandle};
