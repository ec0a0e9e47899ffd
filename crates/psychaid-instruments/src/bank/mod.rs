pub mod anxiety;
pub mod behavioral;
pub mod cognitive;
pub mod depression;
pub mod social;
