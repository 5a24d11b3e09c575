pub mod rgba;
