// SPDX-License-Identifier: MPL-2.0
//! Iced implementation of the notification [`Host`].
//!
//! Iced has no imperative overlay API: the view is rebuilt from state after
//! every update. `OverlayHost` therefore only records which element is
//! mounted and where, and the toast overlay renders from that record.
//! Timers become abortable [`Task`]s that sleep on the Tokio executor and
//! then emit [`Message::TimerElapsed`]; the caller drains them with
//! [`OverlayHost::take_tasks`] at the end of `update`.

use super::host::{Host, MountRequest};
use super::manager::Message;
use super::notification::Generation;
use iced::task::{self, Task};
use std::fmt;
use std::time::Duration;

/// Handle of the overlay element mounted by [`OverlayHost`].
#[derive(Debug, PartialEq, Eq)]
pub struct OverlayMount(u64);

/// Handle of a pending safety-net task.
pub struct OverlayTimer(task::Handle);

impl fmt::Debug for OverlayTimer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("OverlayTimer(..)")
    }
}

/// Record of the element currently occupying the overlay slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mounted {
    id: u64,
    pub generation: Generation,
    pub top: f32,
}

/// Overlay layer and timer source for an Iced application.
#[derive(Default)]
pub struct OverlayHost {
    top_inset: f32,
    next_mount: u64,
    mounted: Option<Mounted>,
    tasks: Vec<Task<Message>>,
}

impl fmt::Debug for OverlayHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OverlayHost")
            .field("top_inset", &self.top_inset)
            .field("mounted", &self.mounted)
            .field("pending_tasks", &self.tasks.len())
            .finish()
    }
}

impl OverlayHost {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the top safe-area inset used for future mounts.
    pub fn set_top_inset(&mut self, inset: f32) {
        self.top_inset = inset.max(0.0);
    }

    /// Element currently mounted, if any.
    #[must_use]
    pub fn mounted(&self) -> Option<&Mounted> {
        self.mounted.as_ref()
    }

    /// Returns the timer tasks scheduled since the last call, batched.
    pub fn take_tasks(&mut self) -> Task<Message> {
        Task::batch(std::mem::take(&mut self.tasks))
    }

    #[must_use]
    pub fn pending_tasks(&self) -> usize {
        self.tasks.len()
    }
}

impl Host for OverlayHost {
    type Mount = OverlayMount;
    type Timer = OverlayTimer;

    fn top_inset(&self) -> f32 {
        self.top_inset
    }

    fn mount(&mut self, request: MountRequest) -> OverlayMount {
        let id = self.next_mount;
        self.next_mount += 1;
        self.mounted = Some(Mounted {
            id,
            generation: request.generation,
            top: request.top,
        });
        OverlayMount(id)
    }

    fn unmount(&mut self, mount: OverlayMount) {
        if self.mounted.is_some_and(|m| m.id == mount.0) {
            self.mounted = None;
        }
    }

    fn schedule(&mut self, delay: Duration, generation: Generation) -> OverlayTimer {
        let (task, handle) = Task::perform(
            async move { tokio::time::sleep(delay).await },
            move |()| Message::TimerElapsed(generation),
        )
        .abortable();
        self.tasks.push(task);
        OverlayTimer(handle)
    }

    fn cancel(&mut self, timer: OverlayTimer) {
        timer.0.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::{Manager, NotificationSpec};
    use std::time::Instant;

    #[test]
    fn mount_records_slot_and_unmount_clears_it() {
        let mut host = OverlayHost::new();
        host.set_top_inset(20.0);
        let generation = Generation::default().next();

        let top = host.top_inset() + 16.0;
        let mount = host.mount(MountRequest { generation, top });
        let mounted = host.mounted().copied().expect("element mounted");
        assert_eq!(mounted.generation, generation);
        assert_eq!(mounted.top, 36.0);

        host.unmount(mount);
        assert!(host.mounted().is_none());
    }

    #[test]
    fn stale_unmount_leaves_newer_mount_alone() {
        let mut host = OverlayHost::new();
        let first = host.mount(MountRequest {
            generation: Generation::default(),
            top: 0.0,
        });
        let _second = host.mount(MountRequest {
            generation: Generation::default().next(),
            top: 0.0,
        });

        host.unmount(first);
        assert!(host.mounted().is_some());
    }

    #[test]
    fn negative_inset_is_clamped() {
        let mut host = OverlayHost::new();
        host.set_top_inset(-5.0);
        assert_eq!(host.top_inset(), 0.0);
    }

    #[test]
    fn manager_show_queues_one_timer_task() {
        let mut host = OverlayHost::new();
        let mut manager = Manager::new();

        manager.show(NotificationSpec::new("Saved"), &mut host, Instant::now());
        assert_eq!(host.pending_tasks(), 1);
        assert!(host.mounted().is_some());

        let _ = host.take_tasks();
        assert_eq!(host.pending_tasks(), 0);

        manager.dismiss(&mut host);
        assert!(host.mounted().is_none());
    }
}
