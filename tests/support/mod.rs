pub mod poses;
