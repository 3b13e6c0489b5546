use crate::queue::{QueuedCustomer, WaitingQueue};

fn customer(id: u32, patience_deadline: f64) -> QueuedCustomer {
    QueuedCustomer {
        id,
        arrival: patience_deadline - 30.0,
        patience_deadline,
    }
}

#[test]
fn waiting_queue_is_fifo() {
    let mut q = WaitingQueue::new();
    assert!(q.is_empty());
    q.push(customer(1, 50.0));
    q.push(customer(2, 60.0));
    assert_eq!(q.len(), 2);

    assert_eq!(q.pop_front().expect("customer").id, 1);
    assert_eq!(q.pop_front().expect("customer").id, 2);
    assert!(q.pop_front().is_none());
}

#[test]
fn impatience_removes_minimum_deadline_first() {
    let mut q = WaitingQueue::new();
    q.push(customer(1, 50.0));
    q.push(customer(2, 30.0));
    q.push(customer(3, 70.0));
    assert_eq!(q.next_expiry(), Some(30.0));

    let gone = q.remove_most_impatient().expect("customer");
    assert_eq!(gone.id, 2);
    assert_eq!(gone.patience_deadline, 30.0);
    assert_eq!(q.len(), 2);
    assert_eq!(q.next_expiry(), Some(50.0));

    // 剩下的顺序不变
    let ids: Vec<u32> = q.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![1, 3]);
}

#[test]
fn impatience_ties_remove_the_earlier_member() {
    let mut q = WaitingQueue::new();
    q.push(customer(4, 45.0));
    q.push(customer(5, 45.0));
    assert_eq!(q.remove_most_impatient().expect("customer").id, 4);
}

#[test]
fn empty_queue_has_no_expiry() {
    let mut q = WaitingQueue::new();
    assert_eq!(q.next_expiry(), None);
    assert!(q.remove_most_impatient().is_none());
}
