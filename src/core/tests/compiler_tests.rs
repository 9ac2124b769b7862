use crate::core::compiler::CompiledNetwork;
use crate::core::descriptor::ModuleKind;
use crate::core::types::ModuleId;

const CASCADE: &str = "broadcaster -> a, b, c\n\
                       %a -> b\n\
                       %b -> c\n\
                       %c -> inv\n\
                       &inv -> a\n";

#[test]
fn test_compile_assigns_dense_ids() {
    let network = CompiledNetwork::from_text(CASCADE).unwrap();

    // Five declared modules plus the injected sink.
    assert_eq!(network.len(), 6);
    assert_eq!(network.sink().index(), 0, "Sink should compile to index 0");
    assert_eq!(network.module(network.sink()).kind(), ModuleKind::Sink);
    assert_eq!(
        network.module(network.broadcaster()).kind(),
        ModuleKind::Broadcast
    );
}

#[test]
fn test_compile_wires_conjunction_inputs() {
    let network = CompiledNetwork::from_text(CASCADE).unwrap();

    // `inv` is the only conjunction in the cascade; find it by kind.
    let inv = (0..network.len())
        .map(|i| network.module(ModuleId(i)))
        .find(|m| m.kind() == ModuleKind::Conjunction)
        .expect("Cascade network declares one conjunction");

    let inputs = network.inputs_of(inv.id());
    assert_eq!(inputs.len(), 1, "Only %c outputs into &inv");
    assert_eq!(network.module(inputs[0]).kind(), ModuleKind::FlipFlop);
}

#[test]
fn test_undeclared_output_compiles_to_empty_slot() {
    let network = CompiledNetwork::from_text("broadcaster -> a\n%a -> nowhere\n").unwrap();
    let broadcaster = network.module(network.broadcaster());
    let a_id = broadcaster.outputs()[0].expect("'a' is declared and should resolve");
    assert_eq!(
        network.module(a_id).outputs(),
        &[None],
        "'nowhere' is never declared and should compile to an empty slot"
    );
}

#[test]
fn test_duplicate_module_name_is_rejected() {
    let result = CompiledNetwork::from_text("broadcaster -> a\n%a -> b\n%a -> c\n");
    assert!(result.is_err(), "Duplicate declaration should fail");
    assert!(result.unwrap_err().contains("more than once"));
}

#[test]
fn test_module_named_like_the_sink_is_rejected() {
    let result = CompiledNetwork::from_text("broadcaster -> rx\n%rx -> a\n");
    assert!(
        result.is_err(),
        "A declared module colliding with the injected sink should fail"
    );
}

#[test]
fn test_missing_broadcaster_is_rejected() {
    let result = CompiledNetwork::from_text("%a -> b\n%b -> a\n");
    assert!(result.is_err(), "Networks without a broadcaster should fail");
    assert!(result.unwrap_err().contains("broadcaster"));
}

#[test]
fn test_custom_sink_name() {
    let network =
        CompiledNetwork::from_text_with_sink("broadcaster -> a\n%a -> done\n", "done").unwrap();
    let feeders = network.inputs_of(network.sink());
    assert_eq!(feeders.len(), 1, "%a should feed the renamed sink");
}
