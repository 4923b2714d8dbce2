use super::*;
use crate::background::compositor::BackgroundMode;

fn s(secs: u64) -> Duration {
    Duration::from_secs(secs)
}

#[test]
fn empty_deck_is_rejected() {
    assert!(Slideshow::new(Vec::new()).is_err());
}

#[test]
fn next_and_previous_wrap() {
    let mut show = Slideshow::builtin();
    let mut spec = CardSpec::default();
    let last = show.len() - 1;

    show.previous(s(0), &mut spec);
    assert_eq!(show.current_index(), last);
    show.next(s(0), &mut spec);
    assert_eq!(show.current_index(), 0);
    assert_eq!(spec.background.mode, BackgroundMode::Image);
    assert!(!show.show(99, s(0), &mut spec));
    assert_eq!(show.current_index(), 0);
}

#[test]
fn playing_advances_every_five_seconds() {
    let mut show = Slideshow::builtin();
    let mut spec = CardSpec::default();
    show.open(s(0), &mut spec);
    show.play(s(0));

    assert!(!show.tick(s(4), &mut spec));
    assert!(show.tick(s(5), &mut spec));
    assert_eq!(show.current_index(), 1);
    assert!(show.tick(s(10), &mut spec));
    assert_eq!(show.current_index(), 2);
}

#[test]
fn manual_navigation_resets_the_countdown() {
    let mut show = Slideshow::builtin();
    let mut spec = CardSpec::default();
    show.play(s(0));
    show.next(s(4), &mut spec);
    assert!(!show.tick(s(5), &mut spec));
    assert!(show.tick(s(9), &mut spec));
    assert_eq!(show.current_index(), 2);
}

#[test]
fn toggle_and_close_stop_playback() {
    let mut show = Slideshow::builtin();
    let mut spec = CardSpec::default();
    show.open(s(0), &mut spec);
    show.toggle(s(0));
    assert!(show.is_playing());
    show.toggle(s(1));
    assert!(!show.is_playing());

    show.play(s(2));
    show.close();
    assert!(!show.is_open());
    assert!(!show.is_playing());
    assert!(!show.tick(s(60), &mut spec));
}

#[test]
fn paused_navigation_does_not_start_the_timer() {
    let mut show = Slideshow::builtin();
    let mut spec = CardSpec::default();
    show.next(s(0), &mut spec);
    assert!(!show.is_playing());
}

#[test]
fn add_random_appends_and_shows() {
    let mut show = Slideshow::builtin();
    let before = show.len();
    let mut spec = CardSpec::default();
    let mut rng = XorShift32::new(31);
    show.add_random(&mut rng, s(0), &mut spec);
    assert_eq!(show.len(), before + 1);
    assert_eq!(show.current_index(), before);
    assert_eq!(show.current().name, "Random Combination 1");
    assert_eq!(show.progress_pct(), 100.0);
}
