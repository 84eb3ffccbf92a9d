pub mod manager;
pub mod scene;
pub mod stream;
pub mod window;
