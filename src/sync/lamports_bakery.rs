use super::Guard;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

/// Lamport's Bakery algorithm, for any number of workers.
///
/// A worker draws a ticket one higher than every ticket it can see, then waits for every worker holding a
/// smaller ticket. Equal tickets go to the lower worker id. Entering scans every worker twice, so its cost grows
/// with the number of workers.
pub struct Bakery {
    choosing: Vec<AtomicBool>,
    tickets: Vec<AtomicU64>,
}

impl Bakery {
    // Ticket of a worker that is not waiting
    const FREE: u64 = 0;

    pub fn new(size: usize) -> Self {
        Self {
            choosing: (0..size).map(|_| AtomicBool::new(false)).collect(),
            tickets: (0..size).map(|_| AtomicU64::new(Bakery::FREE)).collect(),
        }
    }

    fn draw(&self, id: usize) -> u64 {
        self.choosing[id].store(true, Ordering::SeqCst);
        let ticket = 1 + self
            .tickets
            .iter()
            .fold(0, |acc, t| t.load(Ordering::SeqCst).max(acc));
        self.tickets[id].store(ticket, Ordering::SeqCst);
        self.choosing[id].store(false, Ordering::SeqCst);
        ticket
    }

    fn wait_in_line(&self, id: usize, ticket: u64) {
        for (j, (choosing, other)) in self.choosing.iter().zip(&self.tickets).enumerate() {
            while choosing.load(Ordering::SeqCst) {
                std::hint::spin_loop()
            }
            loop {
                let other = other.load(Ordering::SeqCst);
                if other == Bakery::FREE || (other, j) >= (ticket, id) {
                    break;
                }
                std::hint::spin_loop()
            }
        }
    }
}

impl Guard for Bakery {
    fn enter(&self, id: usize) {
        let ticket = self.draw(id);
        self.wait_in_line(id, ticket);
    }
    fn leave(&self, id: usize) {
        self.tickets[id].store(Bakery::FREE, Ordering::SeqCst);
    }
}
