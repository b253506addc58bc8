pub mod accessory;
pub mod house;
pub mod room;

pub use accessory::Accessory;
pub use house::House;
pub use room::Room;
