pub mod post_board;

pub use post_board::PostBoard;
