//! Proposal order list (append-only for the session)

use thavalon_domain::PlayerName;

use crate::ports::outbound::HostDocumentPort;
use crate::presentation::dom::Element;
use crate::presentation::errors::PhaseError;
use crate::presentation::views::PhaseView;

impl<D: HostDocumentPort> PhaseView<D> {
    pub(crate) fn append_player_order(&mut self, players: &[PlayerName]) -> Result<(), PhaseError> {
        if players.is_empty() {
            return Ok(());
        }

        let list = self.document.require_mut(&self.layout.player_order)?;
        let start = list.child_elements().filter(|el| el.tag == "li").count();
        for (offset, name) in players.iter().enumerate() {
            list.append(
                Element::new("li")
                    .with_id(&(start + offset).to_string())
                    .with_text(name),
            );
        }

        tracing::debug!(count = players.len(), start, "Player order extended");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::infrastructure::document::MemoryDocument;
    use crate::infrastructure::testing::fixtures;
    use crate::ports::outbound::{HostDocumentPort, MockGameActionPort, PhaseEvent};
    use crate::presentation::views::PhaseView;

    fn entries(view: &PhaseView<MemoryDocument>) -> Vec<(String, String)> {
        view.document()
            .element("playerOrderLocation")
            .expect("player order region")
            .child_elements()
            .map(|li| {
                (
                    li.id().unwrap_or_default().to_string(),
                    li.text_content(),
                )
            })
            .collect()
    }

    #[test]
    fn test_order_is_preserved() {
        let mut view = fixtures::view("Alice", MockGameActionPort::new());
        let players = fixtures::players(&["Carol", "Alice", "Bob"]);
        view.apply(PhaseEvent::PlayerOrderSet {
            players: players.clone(),
        })
        .expect("order");

        let rendered: Vec<String> = entries(&view).into_iter().map(|(_, name)| name).collect();
        assert_eq!(rendered, players);
    }

    #[test]
    fn test_ids_continue_across_calls() {
        let mut view = fixtures::view("Alice", MockGameActionPort::new());
        view.apply(PhaseEvent::PlayerOrderSet {
            players: fixtures::players(&["Alice", "Bob"]),
        })
        .expect("first batch");
        view.apply(PhaseEvent::PlayerOrderSet {
            players: fixtures::players(&["Carol"]),
        })
        .expect("second batch");

        assert_eq!(
            entries(&view),
            vec![
                ("0".to_string(), "Alice".to_string()),
                ("1".to_string(), "Bob".to_string()),
                ("2".to_string(), "Carol".to_string()),
            ]
        );
    }

    #[test]
    fn test_empty_order_is_a_no_op() {
        let mut view = fixtures::view("Alice", MockGameActionPort::new());
        let before = view.document().to_html();
        view.apply(PhaseEvent::PlayerOrderSet { players: vec![] })
            .expect("empty input is not an error");
        assert_eq!(view.document().to_html(), before);
        assert!(entries(&view).is_empty());
    }
}
