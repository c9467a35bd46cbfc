pub mod stemmers;

pub use stemmers::en::porter2_stemmer as stem;
