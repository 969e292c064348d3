mod count_matching;

pub use count_matching::CountMatching;
