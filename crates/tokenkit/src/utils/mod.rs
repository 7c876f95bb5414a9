pub mod amounts;
