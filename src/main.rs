use classic_collections::collections::contiguous::{BinaryHeap, Deque, Stack, Vector};
use classic_collections::collections::graph::AdjListGraph;
use classic_collections::collections::hash::HashSet;
use classic_collections::collections::linked::{DoublyLinkedList, SkipList};
use classic_collections::collections::tree::{AvlTree, BitwiseTrie, FenwickTree, RedBlackTree, Rope};
use classic_collections::collections::union_find::DisjointSetUnion;

fn main() {
    println!("\n[Vector / Stack / Deque]\n");

    let mut vec = Vector::new();
    for i in 0..8_u8 {
        vec.push(i);
    }
    vec.insert(2, 100);
    println!("{:?}", vec);
    println!("removed {:?} -> {}", vec.remove(3), vec);

    let stack: Stack<_> = "abcde".chars().collect();
    println!("{}", stack);

    let mut deque: Deque<_> = (0..5).collect();
    deque.push_front(-1);
    deque.push_back(5);
    println!("{}", deque);

    println!("\n[Ordered sets]\n");

    let avl: AvlTree<_> = [50, 20, 80, 10, 30, 70, 90].into_iter().collect();
    println!("{}", avl);

    let mut rbt = RedBlackTree::new();
    for i in 0..10 {
        rbt.insert(i);
    }
    let _ = rbt.remove(&4);
    println!("{}", rbt);

    let skip: SkipList<_> = [3, 1, 4, 1, 5, 9, 2, 6].into_iter().collect();
    println!("{}", skip);

    println!("\n[Hashing]\n");

    let mut set = HashSet::new();
    for word in ["to", "be", "or", "not", "to", "be"] {
        set.insert(word);
    }
    println!("{} distinct words", set.len());

    println!("\n[Linked]\n");

    let mut list: DoublyLinkedList<_> = (0..5).collect();
    list.push_front(-1);
    println!("{}", list);

    println!("\n[Priorities and sums]\n");

    let heap: BinaryHeap<_> = [9, 4, 7, 1, 8].into_iter().collect();
    println!("sorted: {:?}", heap.into_sorted());

    let mut fenwick = FenwickTree::from(&[1_i64, 2, 3, 4, 5][..]);
    fenwick.update(0, 9);
    println!("prefix sums: {:?}", (0..5).map(|i| fenwick.prefix_sum(i)).collect::<Vec<_>>());

    println!("\n[Trie]\n");

    let trie: BitwiseTrie = [0b1010, 0b0110, 0b1111].into_iter().collect();
    println!("{} maximises xor with {}", trie.max_xor_with(0b1010).unwrap_or(0), 0b1010);

    println!("\n[Rope]\n");

    let left: Rope<_> = "hello ".chars().collect();
    let right: Rope<_> = "world".chars().collect();
    let rope = left.concat(right);
    let (head, tail) = rope.split(5);
    println!("{} | {}", head.iter().collect::<String>(), tail.iter().collect::<String>());

    println!("\n[Graph / DSU]\n");

    let mut graph = AdjListGraph::new(5);
    for (a, b) in [(0, 1), (0, 2), (1, 3), (2, 4)] {
        let _ = graph.add_edge(a, b);
    }
    print!("bfs from 0:");
    let _ = graph.bfs(0, |v| print!(" {v}"));
    println!();

    let mut dsu = DisjointSetUnion::new(6);
    dsu.union(0, 1);
    dsu.union(2, 3);
    dsu.union(1, 2);
    println!("{} sets, set of 0 has {} members", dsu.num_sets(), dsu.set_size(0));
}
