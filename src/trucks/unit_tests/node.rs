use crate::trucks::{node::TruckListNode, truck::Truck};

fn truck(plate: &str) -> Truck {
    Truck::builder().license_plate(plate).build()
}

#[test]
fn holds_its_truck() {
    let item = Truck::random();
    let node = TruckListNode::new(item.clone());
    assert_eq!(node.truck(), &item);
}

#[test]
fn fresh_node_is_terminal() {
    let node = TruckListNode::new(truck("AAA 111"));
    assert!(node.next().is_none());
}

#[test]
fn set_next_links_and_truncates() {
    let mut a = TruckListNode::new(truck("AAA 111"));

    let previous = a.set_next(Some(TruckListNode::new(truck("BBB 222"))));
    assert!(previous.is_none());
    assert_eq!(a.next().map(|n| n.truck().license_plate()), Some("BBB 222"));

    let detached = a.set_next(None);
    assert!(a.next().is_none());
    assert_eq!(
        detached.map(|n| n.truck().license_plate().to_string()),
        Some("BBB 222".to_string())
    );
}

#[test]
fn set_next_replaces_existing_successor() {
    let mut a = TruckListNode::new(truck("AAA 111"));
    a.set_next(Some(TruckListNode::new(truck("BBB 222"))));

    let replaced = a.set_next(Some(TruckListNode::new(truck("CCC 333"))));
    assert_eq!(
        replaced.map(|n| n.into_truck()),
        Some(truck("BBB 222"))
    );
    assert_eq!(a.next().map(|n| n.truck().license_plate()), Some("CCC 333"));
}

#[test]
fn take_next_detaches_tail() {
    let mut a = TruckListNode::new(truck("AAA 111"));
    a.set_next(Some(TruckListNode::new(truck("BBB 222"))));

    let tail = a.take_next();
    assert!(a.next().is_none());
    assert!(tail.is_some());
    assert!(a.take_next().is_none());
}

#[test]
fn next_mut_allows_relinking_downstream() {
    let mut a = TruckListNode::new(truck("AAA 111"));
    a.set_next(Some(TruckListNode::new(truck("BBB 222"))));

    if let Some(b) = a.next_mut() {
        b.set_next(Some(TruckListNode::new(truck("CCC 333"))));
    }

    let c = a.next().and_then(TruckListNode::next);
    assert_eq!(c.map(|n| n.truck().license_plate()), Some("CCC 333"));
}

#[test]
fn display_delegates_to_truck() {
    let item = Truck::builder()
        .license_plate("ABC 123")
        .carrying_capacity(45000)
        .horse_power(400)
        .transmission("Manual")
        .wheel_base(250)
        .wheel_cut(45)
        .build();
    let node = TruckListNode::new(item.clone());
    assert_eq!(node.to_string(), item.to_string());
}

#[test]
fn into_truck_returns_item() {
    let item = truck("XYZ 999");
    let mut node = TruckListNode::new(item.clone());
    node.set_next(Some(TruckListNode::new(truck("AAA 111"))));
    assert_eq!(node.into_truck(), item);
}

#[test]
fn debug_lists_trucks_in_link_order() {
    let mut a = TruckListNode::new(truck("AAA 111"));
    a.set_next(Some(TruckListNode::new(truck("BBB 222"))));

    let expected = format!("{:?}", [truck("AAA 111"), truck("BBB 222")]);
    assert_eq!(format!("{:?}", a), expected);
}

#[test]
fn into_truck_drops_tail_unless_taken() {
    let mut a = TruckListNode::new(truck("AAA 111"));
    a.set_next(Some(TruckListNode::new(truck("BBB 222"))));

    let tail = a.take_next();
    assert_eq!(a.into_truck(), truck("AAA 111"));
    assert_eq!(tail.map(TruckListNode::into_truck), Some(truck("BBB 222")));
}
