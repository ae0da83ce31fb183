//! End-to-end dispatch tests: flat tokenizer buffer through a
//! namespace strategy into an event collector.

use saxns::{pair_attributes, ElementEvent, EventCollector, NamespaceStrategy};

const SVG_RECT: &str = "http://www.w3.org/2000/svg\trect\tsvg";

/// The tokenizer-side view of `<svg:rect xlink:href="#a" width="10">`
/// with `width` defaulted from a schema.
fn svg_rect_flat() -> Vec<&'static str> {
    vec![
        "http://www.w3.org/1999/xlink\thref\txlink",
        "#a",
        "width",
        "10",
    ]
}

#[test]
fn with_prefixes_full_pipeline() {
    let pairs = pair_attributes(&svg_rect_flat());
    let mut collector = EventCollector::new();

    let strategy = NamespaceStrategy::WithPrefixes;
    strategy.start_element(SVG_RECT, &pairs, 1, &mut collector);
    strategy.end_element(SVG_RECT, &mut collector);

    let events = collector.take_events();
    assert_eq!(events.len(), 2);

    match &events[0] {
        ElementEvent::StartElement {
            uri,
            local_name,
            qname,
            attributes,
        } => {
            assert_eq!(uri, "http://www.w3.org/2000/svg");
            assert_eq!(local_name, "rect");
            assert_eq!(qname, "svg:rect");

            assert_eq!(attributes.len(), 2);
            assert_eq!(attributes[0].uri, "http://www.w3.org/1999/xlink");
            assert_eq!(attributes[0].local_name, "href");
            assert_eq!(attributes[0].qname, "xlink:href");
            assert_eq!(attributes[0].attr_type, "CDATA");
            assert_eq!(attributes[0].value, "#a");
            assert!(attributes[0].specified);

            assert_eq!(attributes[1].uri, "");
            assert_eq!(attributes[1].qname, "width");
            assert!(!attributes[1].specified);
        }
        other => panic!("expected StartElement, got {other:?}"),
    }

    match &events[1] {
        ElementEvent::EndElement {
            uri,
            local_name,
            qname,
        } => {
            assert_eq!(uri, "http://www.w3.org/2000/svg");
            assert_eq!(local_name, "rect");
            assert_eq!(qname, "svg:rect");
        }
        other => panic!("expected EndElement, got {other:?}"),
    }
}

#[test]
fn no_prefixes_full_pipeline() {
    let pairs = pair_attributes(&svg_rect_flat());
    let mut collector = EventCollector::new();

    let strategy = NamespaceStrategy::NoPrefixes;
    strategy.start_element(SVG_RECT, &pairs, 2, &mut collector);
    strategy.end_element(SVG_RECT, &mut collector);

    let events = collector.take_events();
    match &events[0] {
        ElementEvent::StartElement {
            uri,
            local_name,
            qname,
            attributes,
        } => {
            assert_eq!(uri, "http://www.w3.org/2000/svg");
            assert_eq!(local_name, "rect");
            assert_eq!(qname, "");
            // The prefix field of the packing stays inside the local
            // name under two-way splitting
            assert_eq!(attributes[0].local_name, "href\txlink");
            assert_eq!(attributes[0].qname, "");
        }
        other => panic!("expected StartElement, got {other:?}"),
    }
    assert_eq!(events[1].qname(), "");
}

#[test]
fn no_namespaces_full_pipeline() {
    let pairs = pair_attributes(&svg_rect_flat());
    let mut collector = EventCollector::new();

    let strategy = NamespaceStrategy::NoNamespaces;
    strategy.start_element(SVG_RECT, &pairs, 2, &mut collector);
    strategy.end_element(SVG_RECT, &mut collector);

    let events = collector.take_events();
    match &events[0] {
        ElementEvent::StartElement {
            uri,
            local_name,
            qname,
            attributes,
        } => {
            assert_eq!(uri, "");
            assert_eq!(local_name, "");
            assert_eq!(qname, SVG_RECT);
            assert_eq!(attributes[0].qname, "http://www.w3.org/1999/xlink\thref\txlink");
        }
        other => panic!("expected StartElement, got {other:?}"),
    }
    assert_eq!(events[1].qname(), SVG_RECT);
}

#[test]
fn one_strategy_value_drives_many_elements() {
    let strategy = NamespaceStrategy::WithPrefixes;
    let mut collector = EventCollector::new();

    strategy.start_element("http://a\tout\tx", &[], 0, &mut collector);
    strategy.start_element("http://b\tin", &[("id", "1")], 1, &mut collector);
    strategy.end_element("http://b\tin", &mut collector);
    strategy.end_element("http://a\tout\tx", &mut collector);

    let events = collector.take_events();
    let qnames: Vec<&str> = events.iter().map(|e| e.qname()).collect();
    assert_eq!(qnames, ["x:out", "in", "in", "x:out"]);

    let locals: Vec<&str> = events.iter().map(|e| e.local_name()).collect();
    assert_eq!(locals, ["out", "in", "in", "out"]);
}

#[test]
fn separator_constant_matches_wire_format() {
    let sep = saxns::NAME_SEPARATOR as char;
    let packed = format!("http://ns{sep}foo{sep}ns1");
    assert_eq!(saxns::split_name_full(&packed), ("http://ns", "foo", "ns1"));
}

mod properties {
    use proptest::prelude::*;
    use saxns::{
        pair_attributes, qualified_name, split_name, split_name_full, ElementEvent,
        EventCollector, NamespaceStrategy,
    };

    proptest! {
        /// A name without the separator decodes to a bare local name
        #[test]
        fn bare_name_decodes_to_local_name(s in "[^\t]{0,32}") {
            prop_assert_eq!(split_name(&s), ("", s.as_str()));
            prop_assert_eq!(split_name_full(&s), ("", s.as_str(), ""));
        }

        /// Two packed fields decode back exactly
        #[test]
        fn two_fields_round_trip(u in "[^\t]{0,16}", l in "[^\t]{0,16}") {
            let packed = format!("{u}\t{l}");
            prop_assert_eq!(split_name(&packed), (u.as_str(), l.as_str()));
        }

        /// Three packed fields decode back exactly
        #[test]
        fn three_fields_round_trip(
            u in "[^\t]{0,16}",
            l in "[^\t]{0,16}",
            p in "[^\t]{0,16}",
        ) {
            let packed = format!("{u}\t{l}\t{p}");
            prop_assert_eq!(split_name_full(&packed), (u.as_str(), l.as_str(), p.as_str()));
        }

        /// Qualified names are `local` or `prefix:local`, nothing else
        #[test]
        fn qualified_name_shape(p in "[^\t:]{0,8}", l in "[^\t:]{1,8}") {
            let qname = qualified_name(&p, &l);
            if p.is_empty() {
                prop_assert_eq!(qname.as_ref(), l.as_str());
            } else {
                prop_assert_eq!(qname.into_owned(), format!("{p}:{l}"));
            }
        }

        /// The first `specified_count` records are flagged specified,
        /// the rest are not, in input order
        #[test]
        fn specified_count_partition(
            (count, specified) in (0usize..6).prop_flat_map(|n| (Just(n), 0..=n)),
        ) {
            let storage: Vec<(String, String)> = (0..count)
                .map(|i| (format!("a{i}"), format!("v{i}")))
                .collect();
            let pairs: Vec<(&str, &str)> = storage
                .iter()
                .map(|(n, v)| (n.as_str(), v.as_str()))
                .collect();

            let mut collector = EventCollector::new();
            NamespaceStrategy::NoNamespaces.start_element("e", &pairs, specified, &mut collector);

            match &collector.events()[0] {
                ElementEvent::StartElement { attributes, .. } => {
                    prop_assert_eq!(attributes.len(), count);
                    for (index, attr) in attributes.iter().enumerate() {
                        prop_assert_eq!(attr.specified, index < specified);
                        let expected_qname = format!("a{index}");
                        let expected_value = format!("v{index}");
                        prop_assert_eq!(attr.qname.as_str(), expected_qname.as_str());
                        prop_assert_eq!(attr.value.as_str(), expected_value.as_str());
                    }
                }
                other => prop_assert!(false, "expected StartElement, got {:?}", other),
            }
        }

        /// Pairing the flat buffer preserves order and arity
        #[test]
        fn pairing_preserves_order(count in 0usize..8) {
            let storage: Vec<String> = (0..count * 2).map(|i| format!("s{i}")).collect();
            let flat: Vec<&str> = storage.iter().map(String::as_str).collect();

            let pairs = pair_attributes(&flat);
            prop_assert_eq!(pairs.len(), count);
            for (index, &(name, value)) in pairs.iter().enumerate() {
                let expected_name = format!("s{}", index * 2);
                let expected_value = format!("s{}", index * 2 + 1);
                prop_assert_eq!(name, expected_name.as_str());
                prop_assert_eq!(value, expected_value.as_str());
            }
        }
    }
}
