use super::*;

impl GameSession {
    /// Aplica un evento y devuelve qué ha pasado. Los eventos que no aplican
    /// a la pantalla actual no cambian nada.
    pub fn handle(&mut self, event: Event) -> Transition {
        let result = match &event {
            Event::ToggleSound => {
                self.sound_enabled = !self.sound_enabled;
                Some((Outcome::SoundToggled(self.sound_enabled), Some(SoundCue::Click)))
            }
            Event::InstallAvailable => self
                .install
                .on_available()
                .then_some((Outcome::BannerChanged, None)),
            Event::InstallAccepted => self
                .install
                .on_accepted()
                .then_some((Outcome::BannerChanged, None)),
            Event::InstallDeclined => self
                .install
                .on_declined()
                .then_some((Outcome::BannerChanged, None)),
            Event::DismissInstall => self
                .install
                .dismiss()
                .then_some((Outcome::BannerChanged, None)),
            Event::Installed => self
                .install
                .on_installed()
                .then_some((Outcome::BannerChanged, Some(SoundCue::Success))),
            Event::AlreadyInstalled => self
                .install
                .on_installed()
                .then_some((Outcome::BannerChanged, None)),
            Event::RequestInstall => self
                .install
                .can_request()
                .then_some((Outcome::InstallRequested, None)),
            _ => self.handle_screen_event(event.clone()),
        };

        match result {
            Some((outcome, cue)) => self.transition(outcome, cue),
            None => {
                log::debug!("ignored {event:?} on {:?}", self.screen);
                self.transition(Outcome::Ignored, None)
            }
        }
    }

    fn handle_screen_event(&mut self, event: Event) -> Option<(Outcome, Option<SoundCue>)> {
        match (self.screen, event) {
            (Screen::Splash, Event::SplashElapsed) => {
                Some(self.go_to(Screen::Story, SoundCue::Success))
            }
            (Screen::Story, Event::StartAdventure) => {
                Some(self.go_to(Screen::LevelSelect, SoundCue::Success))
            }
            (Screen::LevelSelect, Event::SelectLevel(level)) => self.select_level(level),
            (Screen::ShopSelect, Event::SelectShop(shop_id)) => self.enter_shop(shop_id),
            (Screen::ShopSelect, Event::Back) => {
                Some(self.go_to(Screen::LevelSelect, SoundCue::Click))
            }
            (Screen::Shopping, event) => self.handle_shopping(event),
            (Screen::LevelComplete, Event::Continue) => Some(self.finish_level()),
            _ => None,
        }
    }

    fn handle_shopping(&mut self, event: Event) -> Option<(Outcome, Option<SoundCue>)> {
        // Con el acertijo abierto solo valen los eventos del propio acertijo
        if self.cart.is_riddle_open() {
            return match event {
                Event::EditAnswer(text) => self
                    .cart
                    .set_answer(text)
                    .then_some((Outcome::AnswerEdited, None)),
                Event::SubmitAnswer => self.submit_answer(),
                Event::CancelRiddle => {
                    self.cart.take_pending();
                    Some((Outcome::RiddleCancelled, Some(SoundCue::Click)))
                }
                _ => None,
            };
        }

        match event {
            Event::AddItem(name) => self.open_riddle(&name),
            Event::Back => Some(self.go_to(Screen::ShopSelect, SoundCue::Click)),
            Event::Checkout if self.is_shop_complete() => {
                Some(self.go_to(Screen::LevelComplete, SoundCue::Coin))
            }
            _ => None,
        }
    }

    fn select_level(&mut self, level: u32) -> Option<(Outcome, Option<SoundCue>)> {
        if !self.progress.select_level(level) {
            return None;
        }
        Some(self.go_to(Screen::ShopSelect, SoundCue::Click))
    }

    fn enter_shop(&mut self, shop_id: ShopId) -> Option<(Outcome, Option<SoundCue>)> {
        let shop = self.catalog.shop(shop_id)?;
        if !self.progress.select_shop(shop) {
            return None;
        }
        self.cart.enter_shop(shop_id);
        Some(self.go_to(Screen::Shopping, SoundCue::Success))
    }

    fn open_riddle(&mut self, name: &str) -> Option<(Outcome, Option<SoundCue>)> {
        let shop_id = self.progress.current_shop?;
        let item = self.catalog.item(shop_id, name)?.clone();
        self.cart
            .open_riddle(item)
            .then_some((Outcome::RiddleOpened, Some(SoundCue::Click)))
    }

    fn submit_answer(&mut self) -> Option<(Outcome, Option<SoundCue>)> {
        let pending = self.cart.take_pending()?;
        let item = pending.item;

        if item.accepts(&pending.answer_input) {
            let coins = item.reward_coins;
            let name = item.name.clone();
            self.rewards.award_correct_answer(coins);
            self.cart.push(item);
            log::info!("correct answer for {name}: +{coins} coins");
            Some((Outcome::Correct { item: name, coins }, Some(SoundCue::Success)))
        } else {
            Some((Outcome::Incorrect { item: item.name }, Some(SoundCue::Error)))
        }
    }

    /// Sale de "nivel completado" y abre el siguiente nivel si existe.
    fn finish_level(&mut self) -> (Outcome, Option<SoundCue>) {
        let next = self.progress.current_level.map(|level| level + 1);
        self.screen = Screen::LevelSelect;

        match next {
            Some(level) if self.progress.unlock(level) => {
                log::info!("level {level} unlocked");
                (Outcome::LevelUnlocked(level), Some(SoundCue::Success))
            }
            _ => (Outcome::Moved, Some(SoundCue::Success)),
        }
    }

    fn go_to(&mut self, screen: Screen, cue: SoundCue) -> (Outcome, Option<SoundCue>) {
        log::info!("screen {:?} -> {:?}", self.screen, screen);
        self.screen = screen;
        (Outcome::Moved, Some(cue))
    }

    fn transition(&self, outcome: Outcome, cue: Option<SoundCue>) -> Transition {
        Transition {
            screen: self.screen,
            outcome,
            cue,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::read_catalog_embedded;

    fn session() -> GameSession {
        let catalog = read_catalog_embedded().expect("embedded catalog");
        GameSession::new(catalog, GameConfig::default())
    }

    fn small_session() -> GameSession {
        let yaml = r#"
shops:
  - { id: 1, name: "FRUIT SHOP", unlock_level: 1 }
  - { id: 2, name: "EMPTY SHOP", unlock_level: 2 }
  - { id: 9, name: "LAST SHOP", unlock_level: 10 }
items:
  - { shop_id: 1, name: Apples, price: 5, required_quantity: 2, riddle_text: "5?", accepted_answers: ["5"], reward_coins: 10 }
  - { shop_id: 1, name: Bananas, price: 12, required_quantity: 4, riddle_text: "6 x 2?", accepted_answers: ["12"], reward_coins: 15 }
"#;
        let catalog = Catalog::from_yaml(yaml, 10).expect("test catalog");
        GameSession::new(catalog, GameConfig::default())
    }

    /// Lleva la partida hasta la pantalla de compra de la tienda 1.
    fn shopping_in_fruit_shop(s: &mut GameSession) {
        s.handle(Event::SplashElapsed);
        s.handle(Event::StartAdventure);
        s.handle(Event::SelectLevel(1));
        s.handle(Event::SelectShop(1));
        assert_eq!(s.screen(), Screen::Shopping);
    }

    fn buy(s: &mut GameSession, name: &str, answer: &str) -> Transition {
        s.handle(Event::AddItem(name.into()));
        s.handle(Event::EditAnswer(answer.into()));
        s.handle(Event::SubmitAnswer)
    }

    fn snapshot(s: &GameSession) -> (Screen, ProgressTracker, RewardLedger, CartSession) {
        (
            s.screen(),
            s.progress().clone(),
            *s.rewards(),
            s.cart().clone(),
        )
    }

    #[test]
    fn opening_flow_plays_success_cues() {
        let mut s = session();
        assert_eq!(s.screen(), Screen::Splash);

        let t = s.handle(Event::SplashElapsed);
        assert_eq!((t.screen, t.cue), (Screen::Story, Some(SoundCue::Success)));

        let t = s.handle(Event::StartAdventure);
        assert_eq!((t.screen, t.cue), (Screen::LevelSelect, Some(SoundCue::Success)));
    }

    #[test]
    fn splash_timer_fires_only_on_splash() {
        let mut s = session();
        s.handle(Event::SplashElapsed);
        let t = s.handle(Event::SplashElapsed);
        assert!(t.is_ignored());
        assert_eq!(s.screen(), Screen::Story);
    }

    #[test]
    fn locked_levels_change_nothing() {
        let mut s = session();
        s.handle(Event::SplashElapsed);
        s.handle(Event::StartAdventure);
        let before = snapshot(&s);

        for level in 2..=11 {
            let t = s.handle(Event::SelectLevel(level));
            assert!(t.is_ignored());
            assert_eq!(t.cue, None);
            assert_eq!(snapshot(&s), before);
        }
    }

    #[test]
    fn unlocked_level_goes_to_shop_select() {
        let mut s = session();
        s.handle(Event::SplashElapsed);
        s.handle(Event::StartAdventure);
        let t = s.handle(Event::SelectLevel(1));
        assert_eq!((t.screen, t.cue), (Screen::ShopSelect, Some(SoundCue::Click)));
        assert_eq!(s.progress().current_level, Some(1));
    }

    #[test]
    fn shop_from_another_level_is_ignored() {
        let mut s = session();
        s.handle(Event::SplashElapsed);
        s.handle(Event::StartAdventure);
        s.handle(Event::SelectLevel(1));
        let before = snapshot(&s);

        assert!(s.handle(Event::SelectShop(2)).is_ignored());
        assert!(s.handle(Event::SelectShop(404)).is_ignored());
        assert_eq!(snapshot(&s), before);
    }

    #[test]
    fn correct_answer_scenario() {
        let mut s = session();
        shopping_in_fruit_shop(&mut s);
        assert!(s.cart().is_empty());

        let t = s.handle(Event::AddItem("Apples".into()));
        assert_eq!(t.outcome, Outcome::RiddleOpened);
        assert_eq!(t.cue, Some(SoundCue::Click));
        assert_eq!(s.cart().pending().map(|p| p.answer_input.as_str()), Some(""));

        s.handle(Event::EditAnswer("5".into()));
        let t = s.handle(Event::SubmitAnswer);
        assert_eq!(
            t.outcome,
            Outcome::Correct {
                item: "Apples".into(),
                coins: 10
            }
        );
        assert_eq!(t.cue, Some(SoundCue::Success));
        assert_eq!(t.screen, Screen::Shopping);
        assert!(!s.cart().is_riddle_open());

        let names: Vec<&str> = s.cart().items().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Apples"]);
        let r = s.rewards();
        assert_eq!((r.total_score, r.stars, r.coins), (10, 1, 10));

        // "Add" ya no está disponible para Apples
        let before = snapshot(&s);
        assert!(s.handle(Event::AddItem("Apples".into())).is_ignored());
        assert_eq!(snapshot(&s), before);
    }

    #[test]
    fn wrong_answer_scenario() {
        let mut s = session();
        shopping_in_fruit_shop(&mut s);
        let rewards_before = *s.rewards();

        let t = buy(&mut s, "Bananas", "99");
        assert_eq!(
            t.outcome,
            Outcome::Incorrect {
                item: "Bananas".into()
            }
        );
        assert_eq!(t.cue, Some(SoundCue::Error));
        assert!(!s.cart().is_riddle_open());
        assert!(s.cart().is_empty());
        assert_eq!(*s.rewards(), rewards_before);

        // Sin bloqueo: se puede volver a intentar
        let t = buy(&mut s, "Bananas", " 12 ");
        assert!(matches!(t.outcome, Outcome::Correct { coins: 15, .. }));
    }

    #[test]
    fn leading_zero_is_not_accepted() {
        let mut s = session();
        shopping_in_fruit_shop(&mut s);
        let t = buy(&mut s, "Apples", "05");
        assert!(matches!(t.outcome, Outcome::Incorrect { .. }));
        assert!(s.cart().is_empty());
    }

    #[test]
    fn cancel_closes_riddle_without_changes() {
        let mut s = session();
        shopping_in_fruit_shop(&mut s);
        s.handle(Event::AddItem("Oranges".into()));
        s.handle(Event::EditAnswer("8".into()));

        let t = s.handle(Event::CancelRiddle);
        assert_eq!(t.outcome, Outcome::RiddleCancelled);
        assert_eq!(t.cue, Some(SoundCue::Click));
        assert!(!s.cart().is_riddle_open());
        assert!(s.cart().is_empty());
        assert_eq!(s.rewards().stars, 0);
    }

    #[test]
    fn riddle_overlay_blocks_other_shopping_actions() {
        let mut s = session();
        shopping_in_fruit_shop(&mut s);
        s.handle(Event::AddItem("Apples".into()));

        assert!(s.handle(Event::Back).is_ignored());
        assert!(s.handle(Event::AddItem("Bananas".into())).is_ignored());
        assert!(s.handle(Event::Checkout).is_ignored());
        assert_eq!(s.screen(), Screen::Shopping);
        assert_eq!(
            s.cart().pending().map(|p| p.item.name.as_str()),
            Some("Apples")
        );
    }

    #[test]
    fn answer_events_without_riddle_are_ignored() {
        let mut s = session();
        shopping_in_fruit_shop(&mut s);
        assert!(s.handle(Event::EditAnswer("5".into())).is_ignored());
        assert!(s.handle(Event::SubmitAnswer).is_ignored());
        assert!(s.handle(Event::CancelRiddle).is_ignored());
        assert!(s.handle(Event::AddItem("Carrots".into())).is_ignored());
    }

    #[test]
    fn reentering_a_shop_empties_the_cart() {
        let mut s = session();
        shopping_in_fruit_shop(&mut s);
        buy(&mut s, "Apples", "5");
        assert_eq!(s.cart().len(), 1);

        let t = s.handle(Event::Back);
        assert_eq!((t.screen, t.cue), (Screen::ShopSelect, Some(SoundCue::Click)));
        s.handle(Event::SelectShop(1));
        assert_eq!(s.screen(), Screen::Shopping);
        assert!(s.cart().is_empty());

        // Las recompensas no se pierden
        assert_eq!(s.rewards().coins, 10);
    }

    #[test]
    fn back_from_shop_select_returns_to_levels() {
        let mut s = session();
        s.handle(Event::SplashElapsed);
        s.handle(Event::StartAdventure);
        s.handle(Event::SelectLevel(1));
        let t = s.handle(Event::Back);
        assert_eq!((t.screen, t.cue), (Screen::LevelSelect, Some(SoundCue::Click)));
    }

    #[test]
    fn checkout_requires_every_item() {
        let mut s = small_session();
        shopping_in_fruit_shop(&mut s);

        assert!(s.handle(Event::Checkout).is_ignored());
        buy(&mut s, "Apples", "5");
        assert!(s.handle(Event::Checkout).is_ignored());
        buy(&mut s, "Bananas", "12");

        let t = s.handle(Event::Checkout);
        assert_eq!((t.screen, t.cue), (Screen::LevelComplete, Some(SoundCue::Coin)));
    }

    #[test]
    fn continue_unlocks_next_level_once() {
        let mut s = small_session();
        shopping_in_fruit_shop(&mut s);
        buy(&mut s, "Apples", "5");
        buy(&mut s, "Bananas", "12");
        s.handle(Event::Checkout);

        let t = s.handle(Event::Continue);
        assert_eq!(t.outcome, Outcome::LevelUnlocked(2));
        assert_eq!((t.screen, t.cue), (Screen::LevelSelect, Some(SoundCue::Success)));
        let unlocked: Vec<u32> = s.progress().unlocked_levels().iter().copied().collect();
        assert_eq!(unlocked, vec![1, 2]);

        // Repetir el nivel 1 no desbloquea nada nuevo
        s.handle(Event::SelectLevel(1));
        s.handle(Event::SelectShop(1));
        buy(&mut s, "Apples", "5");
        buy(&mut s, "Bananas", "12");
        s.handle(Event::Checkout);
        let t = s.handle(Event::Continue);
        assert_eq!(t.outcome, Outcome::Moved);
        assert_eq!(s.progress().unlocked_levels().len(), 2);
    }

    #[test]
    fn empty_shop_can_be_checked_out_right_away() {
        let mut s = small_session();
        shopping_in_fruit_shop(&mut s);
        buy(&mut s, "Apples", "5");
        buy(&mut s, "Bananas", "12");
        s.handle(Event::Checkout);
        s.handle(Event::Continue);

        s.handle(Event::SelectLevel(2));
        s.handle(Event::SelectShop(2));
        assert_eq!(s.screen(), Screen::Shopping);
        let t = s.handle(Event::Checkout);
        assert_eq!(t.screen, Screen::LevelComplete);
    }

    #[test]
    fn last_level_does_not_unlock_past_ten() {
        let mut s = small_session();
        for level in 2..=10 {
            s.progress.unlock(level);
        }
        s.handle(Event::SplashElapsed);
        s.handle(Event::StartAdventure);
        s.handle(Event::SelectLevel(10));
        s.handle(Event::SelectShop(9));
        s.handle(Event::Checkout);
        assert_eq!(s.screen(), Screen::LevelComplete);

        let t = s.handle(Event::Continue);
        assert_eq!(t.outcome, Outcome::Moved);
        assert_eq!(s.progress().highest_unlocked(), 10);
        assert!(!s.progress().is_unlocked(11));
    }

    #[test]
    fn toggle_sound_works_on_any_screen() {
        let mut s = session();
        let t = s.handle(Event::ToggleSound);
        assert_eq!(t.outcome, Outcome::SoundToggled(false));
        assert_eq!(t.screen, Screen::Splash);
        assert!(!s.sound_enabled());
        s.handle(Event::ToggleSound);
        assert!(s.sound_enabled());
    }

    #[test]
    fn install_flow() {
        let mut s = session();
        assert!(s.handle(Event::RequestInstall).is_ignored());

        s.handle(Event::InstallAvailable);
        assert!(s.install_banner().should_show());
        let t = s.handle(Event::RequestInstall);
        assert_eq!(t.outcome, Outcome::InstallRequested);

        s.handle(Event::InstallAccepted);
        assert!(!s.install_banner().should_show());

        let t = s.handle(Event::Installed);
        assert_eq!(t.cue, Some(SoundCue::Success));
        assert!(s.handle(Event::Installed).is_ignored());
    }

    #[test]
    fn launching_installed_marks_it_without_a_cue() {
        let mut s = session();
        let t = s.handle(Event::AlreadyInstalled);
        assert_eq!(t.outcome, Outcome::BannerChanged);
        assert_eq!(t.cue, None);
        assert!(s.install_banner().is_installed());

        // Un aviso de instalación posterior ya no hace nada
        assert!(s.handle(Event::InstallAvailable).is_ignored());
        assert!(s.handle(Event::Installed).is_ignored());
    }
}
