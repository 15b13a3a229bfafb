pub mod improv_demo;
pub mod shop_demo;
pub mod tools;
