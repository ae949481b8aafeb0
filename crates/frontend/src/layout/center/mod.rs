pub mod center;

pub use center::TabRouter;
