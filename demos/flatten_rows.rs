use downstream::{BaseStream, Collectors, Downstream, StreamResult};

fn main() -> StreamResult<()> {
    let rows = vec![
        vec![1, 2, 3, 4, 5],
        vec![6, 7, 8, 9, 10],
        vec![11, 12, 13, 14, 15],
        vec![16, 17, 18, 19, 20],
    ];

    let result = Downstream::of(rows)
        .flat_map(Downstream::of)?
        .limit(5)?
        .peek(|n| println!("{}", n))?
        .collect(Collectors::to_array())?;

    println!("{:?}", result);
    Ok(())
}
