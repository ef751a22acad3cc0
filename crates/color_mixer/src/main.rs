fn main() {
    color_mixer::run();
}
