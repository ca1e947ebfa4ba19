//! Example: Print tracing messages while generating trucks
use trucks::trucks::{node::TruckListNode, truck::Truck};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    let mut head = TruckListNode::new(Truck::random());
    head.set_next(Some(TruckListNode::new(Truck::random())));

    let mut cursor = Some(&head);
    while let Some(node) = cursor {
        node.truck().print();
        node.truck().validate()?;
        cursor = node.next();
    }

    let invalid = Truck::builder().license_plate("ABC 123").transmission("CVT").build();
    if let Err(e) = invalid.validate() {
        eprintln!("Error: {}", e);
    }
    Ok(())
}
