pub mod seaorm;

pub use seaorm::SeaOrmShoppingRepository;
