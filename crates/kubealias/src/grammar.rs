//! The kubectl fragment tables
//!
//! Every alias this tool emits is assembled from the part groups defined
//! here: the base command, an optional slot for global modifiers, one
//! operation, one resource, any mix of output flags, and at most one
//! trailing flag that consumes the next word on the command line. The
//! requirement and incompatibility lists mirror what kubectl itself
//! accepts, so the generated aliases stay runnable.

use crate::fragment::{Fragment, PartGroup};

/// Build the kubectl part groups, in composition order.
pub fn kubectl() -> Vec<PartGroup> {
    let commands = vec![Fragment::new("k", "kubectl")];

    // No global modifiers ship today. The slot stays between the base
    // command and the operation so cluster-wide flags can land here.
    let global_modifiers: Vec<Fragment> = Vec::new();

    let operations = vec![
        Fragment::new("a", "apply"),
        Fragment::new("k", "kustomize"),
        Fragment::new("ex", "exec"),
        Fragment::new("lo", "logs"),
        Fragment::new("g", "get"),
        Fragment::new("d", "describe"),
        Fragment::new("del", "delete"),
        Fragment::new("c", "create"),
        Fragment::new("run", "run"),
    ];

    let resources = vec![
        Fragment::new("po", "pods").requires(&["g", "d", "del"]),
        Fragment::new("dep", "deployment").requires(&["g", "d", "del", "c"]),
        Fragment::new("ds", "daemonset").requires(&["g", "d", "del"]),
        Fragment::new("svc", "service").requires(&["g", "d", "del"]),
        Fragment::new("ing", "ingress").requires(&["g", "d", "del"]),
        Fragment::new("cm", "configmap").requires(&["g", "d", "del", "c"]),
        Fragment::new("sec", "secret").requires(&["g", "d", "del", "c"]),
        Fragment::new("no", "nodes").requires(&["g", "d"]),
        Fragment::new("ns", "namespaces").requires(&["g", "d", "del", "c"]),
        Fragment::new("sa", "serviceaccounts").requires(&["g", "d", "del", "c"]),
    ];

    let flags = vec![
        Fragment::new("oyaml", "-o=yaml")
            .requires(&["g", "c"])
            .excludes(&["owide", "ojson", "sl"]),
        Fragment::new("owide", "-o=wide")
            .requires(&["g"])
            .excludes(&["oyaml", "ojson"]),
        Fragment::new("ojson", "-o=json")
            .requires(&["g"])
            .excludes(&["owide", "oyaml", "sl"]),
        Fragment::new("all", "--all-namespaces")
            .requires(&["g", "d"])
            .excludes(&["del", "f", "no"]),
        Fragment::new("sl", "--show-labels")
            .requires(&["g"])
            .excludes(&["oyaml", "ojson"]),
        Fragment::new("w", "--watch")
            .requires(&["g"])
            .excludes(&["oyaml", "ojson", "owide"]),
        Fragment::new("drc", "--dry-run=client")
            .requires(&["a", "c", "run"])
            .excludes(&["owide", "all", "sl", "w", "drs"]),
        Fragment::new("drs", "--dry-run=server")
            .requires(&["a", "c", "run"])
            .excludes(&["owide", "all", "sl", "w", "drc"]),
    ];

    // -f names a manifest, so it shuts out every resource fragment along
    // with the flags that would fight it for the trailing word.
    let mut not_with_file: Vec<&str> = resources.iter().map(|f| f.short.as_str()).collect();
    not_with_file.extend(["all", "l"]);

    // These consume the word after them, so at most one may appear and it
    // has to sit last.
    let value_flags = vec![
        Fragment::new("f", "-f")
            .requires(&["g", "d", "del", "c"])
            .excludes(&not_with_file),
        Fragment::new("l", "-l")
            .requires(&["g", "d", "del"])
            .excludes(&["f", "all"]),
        // pf: port-forward, not aliased on its own yet
        Fragment::new("n", "--namespace")
            .requires(&["g", "d", "del", "lo", "ex", "pf"])
            .excludes(&["ns", "no", "all"]),
    ];

    vec![
        PartGroup {
            fragments: commands,
            optional: false,
            exactly_one: true,
        },
        PartGroup {
            fragments: global_modifiers,
            optional: true,
            exactly_one: false,
        },
        PartGroup {
            fragments: operations,
            optional: true,
            exactly_one: true,
        },
        PartGroup {
            fragments: resources,
            optional: true,
            exactly_one: true,
        },
        PartGroup {
            fragments: flags,
            optional: true,
            exactly_one: false,
        },
        PartGroup {
            fragments: value_flags,
            optional: true,
            exactly_one: true,
        },
    ]
}
