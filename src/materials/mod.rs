pub mod appearance;
