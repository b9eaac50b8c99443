#[cfg(test)]
mod tests {
    use crate::core::{
        ContactField, ContactFormState, ContactSubmitter, FEATURE_GRID, HeaderPresentation,
        HeaderVisuals, MenuMachine, MockSubmitter, MotionTimings, NavigationEvent,
        PageTransitions, RevealRegistry, RevealStyle, ScrollAttachment, ScrollState, SitePage,
        SubmissionStatus, TransitionEvent, TransitionPhase,
    };

    fn timings() -> MotionTimings {
        MotionTimings::default()
    }

    // ========================================================================
    // Reveal
    // ========================================================================

    #[test]
    fn test_reveal_fires_exactly_once_for_any_threshold() {
        for step in 0..=20 {
            let threshold = step as f64 / 20.0;
            let mut registry = RevealRegistry::new();
            let id = registry.register(threshold);

            // Climb past the threshold once, then scroll back out and in again
            let mut fired = 0;
            let fractions = [0.0, threshold / 2.0, threshold, 1.0, 0.0, 1.0];
            for fraction in fractions {
                if registry.report(id, fraction).is_some() {
                    fired += 1;
                }
            }

            assert_eq!(fired, 1, "threshold {}", threshold);
            assert!(!registry.is_observed(id));
        }
    }

    #[test]
    fn test_feature_grid_reveals_in_order_and_never_early() {
        let timings = timings();
        let mut registry = RevealRegistry::new();
        let ids: Vec<_> = FEATURE_GRID
            .iter()
            .map(|_| registry.register(timings.reveal_threshold))
            .collect();

        // Every card crosses the threshold at the same instant
        for id in &ids {
            assert!(registry.report(*id, 0.5).is_some());
        }
        assert_eq!(registry.observed_count(), 0);

        for (i, feature) in FEATURE_GRID.iter().enumerate() {
            let delay = feature.reveal_delay(&timings);
            assert_eq!(delay, i as f64 * 100.0);

            // Still hidden right up to its own delay
            let before = RevealStyle::at(delay - 1.0, delay, &timings);
            assert_eq!(before, RevealStyle::hidden(&timings));
            assert_eq!(RevealStyle::at(delay, delay, &timings), RevealStyle::hidden(&timings));

            let moving = RevealStyle::at(delay + 100.0, delay, &timings);
            assert!(moving.opacity > 0.0 && moving.opacity < 1.0);

            let done = RevealStyle::at(delay + timings.reveal_ms, delay, &timings);
            assert_eq!(done, RevealStyle::resting());
        }
    }

    // ========================================================================
    // Scroll and header
    // ========================================================================

    #[test]
    fn test_condensed_tracks_offset_both_ways() {
        let mut scroll = ScrollState::from_timings(&timings());
        for offset in [0.0, 5.0, 10.0, 10.5, 50.0, 3000.0, 11.0, 10.0, 0.0] {
            scroll.record(offset);
            assert_eq!(scroll.is_condensed(), offset > 10.0, "offset {}", offset);
        }
    }

    #[test]
    fn test_header_condenses_and_reverts_within_duration() {
        let timings = timings();
        let mut scroll = ScrollState::from_timings(&timings);
        let mut header = HeaderPresentation::new(scroll.is_condensed(), &timings);
        assert_eq!(header.sample(0.0), HeaderVisuals::EXPANDED);

        assert!(scroll.record(50.0));
        let condensed = HeaderPresentation::resolve(ScrollAttachment::Attached, scroll.is_condensed());
        assert!(condensed);
        assert!(header.sync(condensed, 1000.0));

        let midway = header.sample(1150.0);
        assert!(midway.height_rem < 6.0 && midway.height_rem > 4.5);
        assert_eq!(header.sample(1300.0), HeaderVisuals::CONDENSED);
        assert!(!header.is_animating(1300.0));

        assert!(scroll.record(0.0));
        assert!(header.sync(scroll.is_condensed(), 2000.0));
        assert_eq!(header.sample(2300.0), HeaderVisuals::EXPANDED);
    }

    #[test]
    fn test_header_without_scroll_listener_stays_condensed() {
        let condensed = HeaderPresentation::resolve(ScrollAttachment::Unavailable, false);
        let header = HeaderPresentation::new(condensed, &timings());
        assert_eq!(header.sample(0.0), HeaderVisuals::CONDENSED);
    }

    // ========================================================================
    // Menu
    // ========================================================================

    #[test]
    fn test_navigation_closes_open_menu_for_any_destination() {
        for path in ["/", "/contact", "/unknown", ""] {
            let mut menu = MenuMachine::new();
            menu.toggle();
            assert!(menu.is_open());

            menu.on_navigation(&NavigationEvent::new(path));
            assert!(!menu.is_open());
            assert!(!menu.overlay_mounted());
        }
    }

    #[test]
    fn test_menu_round_trip_matches_initial_state() {
        let initial = MenuMachine::new();
        let mut menu = initial;
        menu.toggle();
        assert!(menu.overlay_mounted());
        menu.toggle();
        assert_eq!(menu, initial);
        assert!(!menu.overlay_mounted());
    }

    // ========================================================================
    // Page transitions
    // ========================================================================

    #[test]
    fn test_home_to_contact_with_menu_open() {
        let timings = timings();
        let mut menu = MenuMachine::new();
        let mut pages = PageTransitions::new(&timings);
        pages.navigate(SitePage::Home, 0.0);
        pages.tick(500.0);
        menu.toggle();

        let event = NavigationEvent::new("/contact");
        menu.on_navigation(&event);
        let contact = pages.navigate(event.page(), 1000.0).unwrap();

        assert!(!menu.is_open());
        let phases: Vec<_> = pages.views().iter().map(|v| (v.page, v.phase)).collect();
        assert_eq!(
            phases,
            vec![
                (SitePage::Home, TransitionPhase::Exiting),
                (SitePage::Contact, TransitionPhase::Entering),
            ]
        );

        pages.tick(1500.0);
        assert_eq!(pages.views().len(), 1);
        let current = pages.current().unwrap();
        assert_eq!(current.generation, contact);
        assert_eq!(current.page, SitePage::Contact);
        assert_eq!(current.phase, TransitionPhase::Settled);
    }

    fn max_visible_opacity(pages: &PageTransitions, now: f64) -> f64 {
        pages
            .views()
            .iter()
            .map(|v| pages.style(v.generation, now).opacity)
            .fold(0.0, f64::max)
    }

    #[test]
    fn test_rapid_navigation_settles_only_the_last_page() {
        let mut pages = PageTransitions::new(&timings());
        pages.navigate(SitePage::Home, 0.0);
        pages.tick(500.0);

        let a = pages.navigate(SitePage::Features, 1000.0).unwrap();
        pages.tick(1100.0);
        let b = pages.navigate(SitePage::About, 1200.0).unwrap();

        // Home was still exiting and gives way; A leaves from mid-entrance
        assert!(!pages.is_live(1));
        assert_eq!(pages.view(a).map(|v| v.phase), Some(TransitionPhase::Exiting));
        assert_eq!(pages.current().map(|v| v.generation), Some(b));

        let mut events = Vec::new();
        let mut now = 1200.0;
        while now < 1400.0 {
            events.extend(pages.tick(now));
            assert!(max_visible_opacity(&pages, now) > 0.0, "blank at {}", now);
            now += 25.0;
        }

        // A third navigation cuts A's exit short
        let c = pages.navigate(SitePage::Contact, 1400.0).unwrap();
        assert!(!pages.is_live(a));
        assert_eq!(pages.view(b).map(|v| v.phase), Some(TransitionPhase::Exiting));

        let mut now = 1400.0;
        while now <= 2200.0 {
            events.extend(pages.tick(now));
            assert!(max_visible_opacity(&pages, now) > 0.0, "blank at {}", now);
            now += 25.0;
        }

        assert!(!events.contains(&TransitionEvent::Settled(a)));
        assert!(!events.contains(&TransitionEvent::Settled(b)));
        assert!(events.contains(&TransitionEvent::Settled(c)));
        assert_eq!(pages.views().len(), 1);
        assert_eq!(pages.current().map(|v| v.generation), Some(c));
    }

    // ========================================================================
    // Contact form
    // ========================================================================

    #[test]
    fn test_contact_submission_scenario() {
        let mut state = ContactFormState::new();
        state.edit(ContactField::Name, "Grace Hopper");
        state.edit(ContactField::Company, "Harbor Freight Lines");
        state.edit(ContactField::Email, "grace@harbor.example");
        state.edit(ContactField::Message, "We want a demo.");

        let payload = state.begin_submit().unwrap();
        assert_eq!(state.status().label(), "Sending...");

        let submitter = MockSubmitter::new(timings().submit_delay_ms);
        let outcome = futures::executor::block_on(submitter.submit(payload));
        state.finish(outcome);

        assert_eq!(state.status(), &SubmissionStatus::Sent);
        assert_eq!(
            state.status().label(),
            "Your message has been sent successfully!"
        );
        for field in ContactField::ALL {
            assert_eq!(state.form().get(field), "");
        }
    }
}
