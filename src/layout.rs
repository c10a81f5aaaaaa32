pub mod collage;
