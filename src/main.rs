use boardlens_core::{
    compose, demo, extract, CameraPose, ViewMode, ViewState,
};
use futures::executor::block_on;

fn main() {
    env_logger::init();

    let spec = demo::demo_board_spec();
    let placements = demo::demo_placements();
    let board = compose(&spec, &placements);

    println!(
        "\n**** {} — {}x{} mm, {} mm thick",
        board.name, board.width, board.height, board.thickness
    );
    println!("**** {} components, {} primitives\n", placements.len(), board.primitive_count());

    println!("STACKUP");
    for layer in &board.layers {
        println!(
            "{:<22} {:>6.3} mm   {:>4} primitives",
            layer.name,
            layer.thickness,
            layer.primitives.len()
        );
    }

    if !board.warnings.is_empty() {
        println!("\nWARNINGS");
        for warning in &board.warnings {
            println!("  {}", warning);
        }
    }

    let mut view = ViewState::default();
    println!("\nVIEW: {}", view.view_description());
    view.set_mode(ViewMode::ThreeD);
    view.set_camera_pose(CameraPose::Top);
    println!("VIEW: {}", view.view_description());

    let bottom = board.bottom_view();
    println!(
        "\nBottom projection: {} layers, nearest layer is {}",
        bottom.layers.len(),
        bottom.layers[0].name
    );

    match block_on(extract(b"demo archive payload", "board.rar")) {
        Ok(files) => {
            println!("\nEXTRACTED FILES");
            for file in &files {
                println!("{:<20} {:>6} bytes   {:?}", file.name, file.size, file.file_type);
            }
        }
        Err(err) => {
            log::error!("Extraction failed: {}", err);
            eprintln!("could not extract file: {}", err);
        }
    }
}
