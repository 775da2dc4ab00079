pub mod solax;
