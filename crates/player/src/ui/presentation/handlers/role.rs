//! Role reveal

use thavalon_domain::RoleInfo;

use crate::ports::outbound::HostDocumentPort;
use crate::presentation::components::widgets;
use crate::presentation::errors::PhaseError;
use crate::presentation::helpers::text;
use crate::presentation::views::PhaseView;

/// Initial reveal plus one reconnect resync
const MAX_ROLE_REVEALS: u8 = 2;

impl<D: HostDocumentPort> PhaseView<D> {
    pub(crate) fn reveal_role(&mut self, role: &RoleInfo) -> Result<(), PhaseError> {
        if self.role_reveals >= MAX_ROLE_REVEALS {
            return Err(PhaseError::invalid(
                "RoleAssigned",
                format!("role was already revealed {MAX_ROLE_REVEALS} times this session"),
            ));
        }

        let blurb = widgets::role_blurb(&self.templates, role);
        self.document.clear(&self.layout.role_blurb)?;
        self.document.append_fragment(&self.layout.role_blurb, blurb)?;
        self.document.set_text(
            &self.layout.role_info,
            &text::role_information_block(&role.information),
        )?;

        self.role_reveals += 1;
        tracing::debug!(role = %role.role_name, team = %role.team, "Role revealed");
        Ok(())
    }
}
