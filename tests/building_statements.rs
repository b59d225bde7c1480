//! Statement and block building, checked with the fluent assertion API

use minilang::minilang::ast::{Operator, Program, Type};
use minilang::minilang::building::{BuildOptions, LocalInitializers};
use minilang::minilang::testing::assert_ast;
use minilang::minilang::{parse_program, parse_program_with, parse_statement};
use minilang_config::Loader;

fn wrap(body: &str) -> Program {
    parse_program(&format!("void main() {{ {} }}", body)).expect("program to build")
}

#[test]
fn if_without_else_has_empty_else_block() {
    let program = wrap("if (true) { x = 1; }");

    assert_ast(&program).function(0, |f| {
        f.body(|b| {
            b.statement_count(1).statement(0, |s| {
                s.assert_if_else()
                    .cond(|c| c.bool(true))
                    .body(|then| {
                        then.statement_count(1).statement(0, |s| {
                            s.assert_assignment().target("x").value(|v| v.int(1));
                        });
                    })
                    .else_block(|e| {
                        e.is_empty();
                    });
            });
        });
    });
}

#[test]
fn while_true_with_empty_body() {
    let program = wrap("while(true){}");

    assert_ast(&program).function(0, |f| {
        f.body(|b| {
            b.statement(0, |s| {
                s.assert_while().cond(|c| c.bool(true)).body(|body| {
                    body.is_empty();
                });
            });
        });
    });
}

#[test]
fn else_if_chain_nests_in_else_blocks() {
    let program = wrap(
        "if (a) { r = 1; } \
         else if (b) { r = 2; } \
         else if (c) { r = 3; } \
         else { r = 4; }",
    );

    assert_ast(&program).function(0, |f| {
        f.body(|b| {
            b.statement_count(1).statement(0, |s| {
                s.assert_if_else().cond(|c| c.location("a")).else_block(|e1| {
                    e1.local_count(0).statement_count(1).statement(0, |s| {
                        s.assert_if_else().cond(|c| c.location("b")).else_block(|e2| {
                            e2.statement_count(1).statement(0, |s| {
                                s.assert_if_else()
                                    .cond(|c| c.location("c"))
                                    .body(|then| {
                                        then.statement(0, |s| {
                                            s.assert_assignment().value(|v| v.int(3));
                                        });
                                    })
                                    .else_block(|last| {
                                        last.statement(0, |s| {
                                            s.assert_assignment().value(|v| v.int(4));
                                        });
                                    });
                            });
                        });
                    });
                });
            });
        });
    });
}

#[test]
fn loop_control_and_returns() {
    let program = parse_program(
        "int f(int n) { while (n) { if (n) { break; } else { continue; } } return n - 1; }
         void g() { return; }",
    )
    .unwrap();

    assert_ast(&program)
        .function_named("f", |f| {
            f.body(|b| {
                b.statement_count(2)
                    .statement(0, |s| {
                        s.assert_while().body(|body| {
                            body.statement(0, |s| {
                                s.assert_if_else()
                                    .body(|then| {
                                        then.statement(0, |s| s.assert_break());
                                    })
                                    .else_block(|e| {
                                        e.statement(0, |s| s.assert_continue());
                                    });
                            });
                        });
                    })
                    .statement(1, |s| {
                        s.assert_return(|v| {
                            v.assert_binary(Operator::Sub)
                                .left(|l| l.location("n"))
                                .right(|r| r.int(1));
                        })
                    });
            });
        })
        .function_named("g", |g| {
            g.return_type(Type::Void).body(|b| {
                b.statement(0, |s| s.assert_return_void());
            });
        });
}

#[test]
fn locals_and_statements_are_separated() {
    let program = wrap("int i = 0; i = i + 1; bool done; done = true;");

    assert_ast(&program).function(0, |f| {
        f.body(|b| {
            b.local_count(2)
                .statement_count(2)
                .local(0, |v| {
                    v.name("i").ty(Type::Int).initializer(|e| e.int(0));
                })
                .local(1, |v| {
                    v.name("done").ty(Type::Bool).no_initializer();
                })
                .statement(0, |s| {
                    s.assert_assignment()
                        .target("i")
                        .value(|v| {
                            v.text("i + 1");
                        });
                })
                .statement(1, |s| {
                    s.assert_assignment().target("done");
                });
        });
    });
}

#[test]
fn discard_policy_from_config_drops_local_initializers() {
    let config = Loader::new()
        .set_override("building.local_initializers", "discard")
        .expect("override to apply")
        .build()
        .expect("config to build");
    let options = BuildOptions::from(&config.building);
    assert_eq!(options.local_initializers, LocalInitializers::Discard);

    let program =
        parse_program_with("int g = 1; void main() { int l = 2; }", &options).unwrap();

    assert_ast(&program)
        .variable(0, |v| {
            v.name("g").initializer(|e| e.int(1));
        })
        .function(0, |f| {
            f.body(|b| {
                b.local(0, |v| {
                    v.name("l").no_initializer();
                });
            });
        });
}

#[test]
fn statement_entry_point() {
    let stmt = parse_statement("if (x) { return 1; }").unwrap();
    assert_eq!(stmt.to_string(), "if (x) Block(0 locals, 1 statements) else Block(0 locals, 0 statements)");
}
