use std::cmp::Ordering;

use crate::entities::Comment;

pub trait NewestFirst {
    fn sort_newest_first(&mut self);
}

impl NewestFirst for [Comment] {
    fn sort_newest_first(&mut self) {
        self.sort_by(cmp_newest_first);
    }
}

// Comments created at the same time are ordered by their id,
// which is assigned in insertion order.
fn cmp_newest_first(a: &Comment, b: &Comment) -> Ordering {
    b.created_at
        .cmp(&a.created_at)
        .then_with(|| b.id.cmp(&a.id))
}
