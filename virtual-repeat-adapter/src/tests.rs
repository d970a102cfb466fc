use crate::*;

use alloc::vec::Vec;
use pretty_assertions::assert_eq;
use virtual_repeat::{BatchStatus, Error, RepeatOptions, ViewContext, ViewHost};

#[derive(Clone, Copy, Debug)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn gen_range_usize(&mut self, start: usize, end_exclusive: usize) -> usize {
        debug_assert!(start < end_exclusive);
        let span = (end_exclusive - start) as u64;
        start + (self.next_u64() % span) as usize
    }
}

fn controller(len: u32, removal_duration_ms: u64) -> Controller<u32> {
    let host = SlotHost::new(20, 200).with_removal_duration(removal_duration_ms);
    let mut c = Controller::new(RepeatOptions::new(200), host);
    assert_eq!(c.replace_items((0..len).collect(), 0), BatchStatus::Applied);
    c
}

fn rendered_items(c: &Controller<u32>) -> Vec<u32> {
    c.host().rendered().map(|v| *v.item).collect()
}

fn assert_in_sync(c: &Controller<u32>) {
    let state = c.state();
    let items = c.items();
    assert!(state.settled);
    assert!(!c.host().is_animating());
    assert_eq!(state.represented_len(), items.len());
    assert_eq!(state.view_count, items.len().min(state.max_views));
    assert_eq!(c.host().buffers(), (state.top_buffer, state.bottom_buffer));
    assert_eq!(
        rendered_items(c),
        items[state.rendered_range()].to_vec(),
        "rendered rows"
    );
    for (slot, view) in c.host().rendered().enumerate() {
        let index = state.first_index + slot;
        assert_eq!(view.context, ViewContext::new(index, items.len()));
    }
}

#[test]
fn controller_fills_window_to_capacity() {
    let c = controller(1000, 0);
    let state = c.state();

    assert_eq!(state.item_height, 20);
    assert_eq!(state.max_views, 27);
    assert_eq!(state.view_count, 27);
    assert_eq!((state.top_buffer, state.bottom_buffer), (0, 19_460));
    assert_eq!(c.host().stats().created, 27);
    assert_eq!(c.host().stats().rebound, 0);
    assert_in_sync(&c);
}

#[test]
fn scrolling_rebinds_views_without_creating_any() {
    let mut c = controller(1000, 0);

    assert!(c.on_scroll(2000));

    let state = c.state();
    assert_eq!(state.first_index, 100);
    assert_eq!((state.top_buffer, state.bottom_buffer), (2000, 17_460));
    let stats = c.host().stats();
    assert_eq!(stats.created, 27);
    assert_eq!(stats.rebound, 27);
    assert_eq!(rendered_items(&c), (100..127).collect::<Vec<u32>>());
    assert_in_sync(&c);
}

#[test]
fn animated_removal_settles_on_tick() {
    let mut c = controller(100, 100);

    assert_eq!(c.remove(5, 0), Ok(BatchStatus::Pending));
    assert!(c.host().is_animating());
    assert_eq!(c.state().view_count, 27);
    assert!(c.host().rendered().nth(5).is_some_and(|v| v.leaving));

    assert_eq!(c.push(1000, 10), BatchStatus::Queued);
    assert!(!c.on_scroll(200));

    assert_eq!(c.tick(50), Ok(None));
    assert_eq!(c.tick(100), Ok(Some(BatchStatus::Applied)));

    let state = c.state();
    assert_eq!(state.first_index, 10);
    assert_eq!((state.top_buffer, state.bottom_buffer), (200, 1260));
    let stats = c.host().stats();
    assert_eq!(stats.removed, 1);
    assert_eq!(stats.recycled, 1);
    assert_eq!(c.host().cached_views(), 0);
    assert_eq!(c.items().last(), Some(&1000));
    assert_in_sync(&c);
}

#[test]
fn in_place_set_skips_animation() {
    let mut c = controller(100, 100);

    assert_eq!(c.set(3, 1000, 0), Ok(BatchStatus::Applied));

    assert!(!c.host().is_animating());
    assert_eq!(rendered_items(&c)[3], 1000);
    assert_in_sync(&c);
}

#[test]
fn shrinking_and_regrowing_recycles_views() {
    let mut c = controller(100, 0);

    c.replace_items((0..10).collect(), 1);
    assert_eq!(c.host().cached_views(), 17);
    assert_eq!(c.host().stats().removed, 17);
    assert!(c.host().rendered().last().is_some_and(|v| v.context.last));
    assert_in_sync(&c);

    c.replace_items((100..200).collect(), 2);
    let stats = c.host().stats();
    assert_eq!(stats.created, 27);
    assert_eq!(stats.recycled, 17);
    assert_eq!(c.host().cached_views(), 0);
    assert_eq!(rendered_items(&c), (100..127).collect::<Vec<u32>>());
    assert_in_sync(&c);
}

#[test]
fn out_of_range_edits_are_rejected() {
    let host = SlotHost::new(20, 200);
    let mut c = Controller::<u32>::new(RepeatOptions::new(200), host);

    assert_eq!(
        c.splice(5, 0, [1], 0),
        Err(Error::SpliceOutOfBounds {
            index: 5,
            added_count: 1,
            len: 0,
        })
    );
    assert!(c.remove(0, 0).is_err());
    assert!(c.set(0, 7, 0).is_err());
    assert!(c.items().is_empty());
    assert_eq!(c.host().stats().created, 0);
}

#[test]
fn viewport_resize_changes_capacity() {
    let mut c = controller(1000, 0);

    assert_eq!(c.on_viewport_size(400), BatchStatus::Applied);

    let state = c.state();
    assert_eq!(state.max_views, 47);
    assert_eq!(state.view_count, 47);
    assert_eq!(c.host().viewport_height(), 400);
    assert_in_sync(&c);
}

#[test]
fn short_list_leaves_distance_to_bottom() {
    let mut c = controller(3, 0);
    assert_eq!(c.host().distance_to_bottom(), 140);

    c.push(3, 0);

    assert_eq!(c.host().distance_to_bottom(), 120);
    assert_eq!(rendered_items(&c), [0, 1, 2, 3]);
    assert_in_sync(&c);
}

#[test]
fn property_random_edits_with_animations_settle_consistently() {
    for seed in 1..=24u64 {
        let mut rng = Lcg::new(seed);
        let len = rng.gen_range_usize(1, 80) as u32;
        let mut c = controller(len, 30);
        let mut next_value = 10_000u32;
        let mut now_ms = 0u64;

        for _step in 0..150 {
            now_ms += rng.gen_range_usize(0, 25) as u64;
            let len = c.items().len();
            match rng.gen_range_usize(0, 8) {
                0 => {
                    let rows = len + 1;
                    c.on_scroll(rng.gen_range_usize(0, rows) as u64 * 20);
                }
                1 => {
                    let new_len = rng.gen_range_usize(0, 80);
                    let items = (0..new_len)
                        .map(|_| {
                            next_value += 1;
                            next_value
                        })
                        .collect();
                    c.replace_items(items, now_ms);
                }
                2 => {
                    next_value += 1;
                    c.push(next_value, now_ms);
                }
                _ => {
                    let index = rng.gen_range_usize(0, len + 1);
                    let removed = rng.gen_range_usize(0, (len - index).min(3) + 1);
                    let added = rng.gen_range_usize(0, 3);
                    let fresh: Vec<u32> = (0..added)
                        .map(|_| {
                            next_value += 1;
                            next_value
                        })
                        .collect();
                    assert!(c.splice(index, removed, fresh, now_ms).is_ok());
                }
            }
            assert!(c.tick(now_ms).is_ok());
            if c.is_settled() {
                assert_in_sync(&c);
            }
        }

        while !c.is_settled() {
            now_ms += 1000;
            assert!(c.tick(now_ms).is_ok());
        }
        assert_in_sync(&c);
    }
}
