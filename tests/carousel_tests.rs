//! Integration tests for the looping carousel
//!
//! These tests verify that the carousel:
//! - Pads the slide list with one phantom copy on each side
//! - Never rests on a phantom once a move has settled
//! - Maps `go_to` offsets onto the padded index
//! - Restores animation on the tick after a re-snap

use gymtrain::carousel::CarouselPhase;
use gymtrain::models::default_slides;
use gymtrain::{CarouselError, CarouselLayout, LoopingCarousel};
use proptest::prelude::*;

fn numbered(n: usize) -> LoopingCarousel<usize> {
    LoopingCarousel::new((0..n).collect(), CarouselLayout::default()).unwrap()
}

#[test]
fn test_default_slides_wrap_around() {
    let mut carousel = LoopingCarousel::new(default_slides(), CarouselLayout::default()).unwrap();
    let first_title = carousel.active_slide().title.clone();

    for _ in 0..carousel.len() {
        carousel.next();
        carousel.on_settle();
        carousel.on_tick();
    }

    assert_eq!(carousel.current_index(), 1);
    assert_eq!(carousel.active_slide().title, first_title);
    assert!(carousel.transition_enabled());
}

#[test]
fn test_prev_from_first_snaps_to_last() {
    let mut carousel = numbered(4);

    carousel.prev();
    assert_eq!(carousel.phase(), CarouselPhase::PhantomLow);
    assert!(carousel.transition_enabled());

    assert!(carousel.on_settle());
    assert_eq!(carousel.current_index(), 4);
    assert!(!carousel.transition_enabled());

    assert!(carousel.on_tick());
    assert!(carousel.transition_enabled());
    assert_eq!(*carousel.active_slide(), 3);
}

#[test]
fn test_move_before_tick_animates() {
    let mut carousel = numbered(3);
    carousel.go_to(2).unwrap();
    carousel.next();
    carousel.on_settle();
    assert!(carousel.reenable_pending());

    carousel.next();

    assert!(carousel.transition_enabled());
    assert!(!carousel.reenable_pending());
    assert_eq!(carousel.current_index(), 2);
}

#[test]
fn test_go_to_out_of_range() {
    let mut carousel = numbered(3);
    assert_eq!(
        carousel.go_to(3),
        Err(CarouselError::OutOfRange { index: 3, len: 3 })
    );
    assert_eq!(carousel.current_index(), 1);
}

#[test]
fn test_translate_centers_active_slide() {
    let carousel = numbered(4);
    // 70% slide + 5% gap: index 1 sits at -75 + 15
    assert!((carousel.translate_percent() - (-60.0)).abs() < 1e-9);
}

proptest! {
    #[test]
    fn prop_padded_length_and_phantoms(n in 1usize..20) {
        let carousel = numbered(n);
        let looped = carousel.looped_slides();

        prop_assert_eq!(looped.len(), n + 2);
        prop_assert_eq!(looped[0], n - 1);
        prop_assert_eq!(looped[n + 1], 0);
        prop_assert_eq!(&looped[1..=n], carousel.slides());
    }

    #[test]
    fn prop_never_rests_on_phantom(
        n in 1usize..10,
        moves in prop::collection::vec(any::<bool>(), 0..60)
    ) {
        let mut carousel = numbered(n);

        for forward in moves {
            if forward {
                carousel.next();
            } else {
                carousel.prev();
            }
            carousel.on_settle();

            let index = carousel.current_index();
            prop_assert!(index >= 1 && index <= n as isize);
            prop_assert!(matches!(carousel.phase(), CarouselPhase::Settled(_)));

            carousel.on_tick();
        }
    }

    #[test]
    fn prop_go_to_maps_offset(n in 1usize..20, k in 0usize..20) {
        let mut carousel = numbered(n);
        let result = carousel.go_to(k);

        if k < n {
            prop_assert!(result.is_ok());
            prop_assert_eq!(carousel.current_index(), k as isize + 1);
            prop_assert_eq!(*carousel.active_slide(), k);
        } else {
            prop_assert!(result.is_err());
        }
    }
}
