pub mod randomizer;
pub mod window;
