use rand::{seq::SliceRandom, Rng};

use crate::db::Question;

/// Category id that stands for "every category" in quiz requests.
pub const ALL_CATEGORIES: i64 = 0;

#[derive(Debug, PartialEq, Eq)]
pub enum Pick {
    Next(Question),
    /// Every question of the pool was already served.
    Exhausted,
}

/// Drops already served questions from `pool` and picks one of the rest uniformly at random.
pub fn pick_question<R>(pool: Vec<Question>, previous: &[i64], rng: &mut R) -> Pick
where
    R: Rng + ?Sized,
{
    let remaining: Vec<Question> = pool
        .into_iter()
        .filter(|question| !previous.contains(&question.id))
        .collect();

    remaining
        .choose(rng)
        .cloned()
        .map(Pick::Next)
        .unwrap_or(Pick::Exhausted)
}
