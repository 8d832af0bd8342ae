pub mod mermaid;
